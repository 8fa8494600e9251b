//! Roster handlers
//!
//! Current analysis and manual refresh.

use axum::{extract::State, Json};
use guild_service::dto::{RefreshResponse, RosterResponse};
use guild_service::RosterService;

use crate::state::AppState;

/// Current roster analysis, counts and fetch status
///
/// GET /roster
pub async fn get_roster(State(state): State<AppState>) -> Json<RosterResponse> {
    let ctx = state.service_context();
    let view = RosterService::new(ctx).current();
    Json(RosterResponse::new(&view, ctx.is_refreshing()))
}

/// Run a refresh cycle now
///
/// POST /roster/refresh
///
/// A failed fetch is reported in the body, not as an error status.
pub async fn refresh_roster(State(state): State<AppState>) -> Json<RefreshResponse> {
    let outcome = RosterService::new(state.service_context()).refresh().await;
    Json(RefreshResponse::from(&outcome))
}
