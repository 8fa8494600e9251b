//! Guild member handlers
//!
//! Exited flag toggling for guild members.

use axum::{extract::State, Json};
use guild_service::dto::CommandResponse;
use guild_service::ExitedService;

use crate::extractors::NamePath;
use crate::response::ApiResult;
use crate::state::AppState;

/// Mark a guild member as exited
///
/// POST /members/{name}/exited
pub async fn mark_exited(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<CommandResponse>> {
    let outcome = ExitedService::new(state.service_context()).mark(&name).await?;
    Ok(Json(CommandResponse::from(&outcome)))
}

/// Return a guild member to active tracking
///
/// DELETE /members/{name}/exited
pub async fn unmark_exited(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<CommandResponse>> {
    let outcome = ExitedService::new(state.service_context()).unmark(&name).await?;
    Ok(Json(CommandResponse::from(&outcome)))
}
