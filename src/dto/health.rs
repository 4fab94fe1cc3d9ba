use serde::Serialize;
use utoipa::ToSchema;

/// Overall service health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    /// The palette store failed its health check.
    Degraded,
}

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self::with_status(HealthStatus::Ok)
    }

    pub fn degraded() -> Self {
        Self::with_status(HealthStatus::Degraded)
    }

    fn with_status(status: HealthStatus) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
