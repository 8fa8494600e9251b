//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use guild_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    // No pool means in-memory storage
    let db_healthy = match ctx.pool() {
        Some(pool) => Some(pool.acquire().await.is_ok()),
        None => None,
    };

    let view = ctx.roster_view();
    let upstream_healthy = if view.last_error.is_some() {
        Some(false)
    } else {
        view.fetched_at.map(|_| true)
    };

    let response = ReadinessResponse::ready(db_healthy, upstream_healthy);
    let status = if response.status == "ready" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
