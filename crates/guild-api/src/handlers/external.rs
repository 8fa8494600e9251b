//! External character handlers

use axum::{extract::State, Json};
use guild_service::dto::{AddExternalRequest, CommandResponse, MemberResponse};
use guild_service::ExternalService;

use crate::extractors::{NamePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// List external characters of the current snapshot
///
/// GET /external-characters
pub async fn list_external(State(state): State<AppState>) -> Json<Vec<MemberResponse>> {
    let members = ExternalService::new(state.service_context()).list();
    Json(members.iter().map(MemberResponse::from).collect())
}

/// Start tracking an external character
///
/// POST /external-characters
pub async fn add_external(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddExternalRequest>,
) -> ApiResult<Created<Json<CommandResponse>>> {
    let outcome = ExternalService::new(state.service_context())
        .add(&request.name)
        .await?;
    Ok(Created(Json(CommandResponse::from(&outcome))))
}

/// Stop tracking an external character
///
/// DELETE /external-characters/{name}
pub async fn remove_external(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<CommandResponse>> {
    let outcome = ExternalService::new(state.service_context())
        .remove(&name)
        .await?;
    Ok(Json(CommandResponse::from(&outcome)))
}

/// POST /external-characters/{name}/exited
pub async fn mark_exited(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<CommandResponse>> {
    let outcome = ExternalService::new(state.service_context())
        .mark_exited(&name)
        .await?;
    Ok(Json(CommandResponse::from(&outcome)))
}

/// DELETE /external-characters/{name}/exited
pub async fn unmark_exited(
    State(state): State<AppState>,
    NamePath(name): NamePath,
) -> ApiResult<Json<CommandResponse>> {
    let outcome = ExternalService::new(state.service_context())
        .unmark_exited(&name)
        .await?;
    Ok(Json(CommandResponse::from(&outcome)))
}
