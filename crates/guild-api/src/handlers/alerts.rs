//! Mass-login alert handlers

use axum::{extract::State, Json};
use chrono::Utc;
use guild_core::AlertConfig;
use guild_service::dto::{AlertConfigResponse, AlertStatusResponse, UpdateAlertConfigRequest};
use guild_service::AlertService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Current level, recent-login count and cooldown status
///
/// GET /alerts
pub async fn get_status(State(state): State<AppState>) -> Json<AlertStatusResponse> {
    let status = AlertService::new(state.service_context()).status(Utc::now());
    Json(AlertStatusResponse::from(&status))
}

/// GET /alerts/config
pub async fn get_config(State(state): State<AppState>) -> Json<AlertConfigResponse> {
    let config = AlertService::new(state.service_context()).config();
    Json(AlertConfigResponse::from(&config))
}

/// Replace the configuration as a whole
///
/// PUT /alerts/config
pub async fn update_config(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateAlertConfigRequest>,
) -> ApiResult<Json<AlertConfigResponse>> {
    let config = AlertService::new(state.service_context())
        .save_config(AlertConfig::from(request))
        .await?;
    Ok(Json(AlertConfigResponse::from(&config)))
}

/// Force-dismiss the visual alert
///
/// POST /alerts/dismiss
pub async fn dismiss(State(state): State<AppState>) -> Json<AlertStatusResponse> {
    let status = AlertService::new(state.service_context()).dismiss();
    Json(AlertStatusResponse::from(&status))
}

/// Clear the notification cooldown
///
/// POST /alerts/cooldown/reset
pub async fn reset_cooldown(State(state): State<AppState>) -> Json<AlertStatusResponse> {
    let status = AlertService::new(state.service_context())
        .reset_cooldown()
        .await;
    Json(AlertStatusResponse::from(&status))
}
