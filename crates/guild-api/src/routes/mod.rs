//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{alerts, external, health, members, notes, roster};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(roster_routes())
        .merge(external_routes())
        .merge(note_routes())
        .merge(alert_routes())
}

/// Roster and guild member routes
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route("/roster", get(roster::get_roster))
        .route("/roster/refresh", post(roster::refresh_roster))
        .route(
            "/members/:name/exited",
            post(members::mark_exited).delete(members::unmark_exited),
        )
}

/// External character routes
fn external_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/external-characters",
            get(external::list_external).post(external::add_external),
        )
        .route(
            "/external-characters/:name",
            delete(external::remove_external),
        )
        .route(
            "/external-characters/:name/exited",
            post(external::mark_exited).delete(external::unmark_exited),
        )
}

/// Note routes
fn note_routes() -> Router<AppState> {
    Router::new()
        .route("/notes", get(notes::list_notes).post(notes::save_note))
        .route("/notes/:name", get(notes::get_note).delete(notes::delete_note))
}

/// Mass-login alert routes
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(alerts::get_status))
        .route(
            "/alerts/config",
            get(alerts::get_config).put(alerts::update_config),
        )
        .route("/alerts/dismiss", post(alerts::dismiss))
        .route("/alerts/cooldown/reset", post(alerts::reset_cooldown))
}
