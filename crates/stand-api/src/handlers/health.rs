//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use stand_service::dto::{HealthResponse, ReadinessResponse};
use tracing::warn;

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Readiness check against the database
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let database_up = stand_db::ping(state.service_context().pool())
        .await
        .inspect_err(|e| warn!(error = %e, "Database ping failed"))
        .is_ok();

    let response = ReadinessResponse::new(database_up);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
