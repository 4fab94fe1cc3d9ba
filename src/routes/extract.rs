//! Request extractors shared by the route handlers.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use axum_valid::{Valid, ValidRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON body that has passed its `validator` rules.
///
/// Both malformed bodies and rule violations are reported as [`AppError`], so
/// clients always receive the JSON `{ "message": ... }` error shape.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Valid::<Json<T>>::from_request(req, state).await {
            Ok(Valid(Json(value))) => Ok(Self(value)),
            Err(ValidRejection::Valid(errors)) => Err(errors.into()),
            Err(ValidRejection::Inner(rejection)) => {
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
