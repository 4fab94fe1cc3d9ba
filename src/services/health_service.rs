use tracing::warn;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Report `ok` when the palette store answers its health check, `degraded` otherwise.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match state.store().health_check().await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}
