use axum::Json;

use pulse_core::HealthReport;

/// Health check on the root path. Constructs a fresh report per request.
pub async fn health() -> Json<HealthReport> {
    Json(HealthReport::startup())
}
