//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Names and note messages are trimmed and length-checked again by the domain.

use guild_core::AlertConfig;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// External Character Requests
// ============================================================================

/// Start tracking an external character
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddExternalRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
}

// ============================================================================
// Note Requests
// ============================================================================

/// Create or replace a note
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveNoteRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "message is required"))]
    pub message: String,
}

// ============================================================================
// Alert Requests
// ============================================================================

/// Replace the alert configuration
///
/// Missing keys keep their default values; bounds follow the operator form.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAlertConfigRequest {
    pub enabled: bool,

    #[validate(range(min = 1, max = 50, message = "yellowAlertPlayers must be 1-50"))]
    pub yellow_alert_players: u32,

    #[validate(range(min = 1, max = 50, message = "redAlertPlayers must be 1-50"))]
    pub red_alert_players: u32,

    #[serde(alias = "timeWindow")]
    #[validate(range(min = 1, max = 60, message = "timeWindowMinutes must be 1-60"))]
    pub time_window_minutes: u32,

    pub sound_enabled: bool,

    #[validate(range(max = 120, message = "cooldownMinutes must be 0-120"))]
    pub cooldown_minutes: u32,

    #[validate(range(max = 100, message = "soundVolume must be 0-100"))]
    pub sound_volume: u8,
}

impl Default for UpdateAlertConfigRequest {
    fn default() -> Self {
        let defaults = AlertConfig::default();
        Self {
            enabled: defaults.enabled,
            yellow_alert_players: defaults.yellow_alert_players,
            red_alert_players: defaults.red_alert_players,
            time_window_minutes: defaults.time_window_minutes,
            sound_enabled: defaults.sound_enabled,
            cooldown_minutes: defaults.cooldown_minutes,
            sound_volume: defaults.sound_volume,
        }
    }
}

impl From<UpdateAlertConfigRequest> for AlertConfig {
    fn from(req: UpdateAlertConfigRequest) -> Self {
        Self {
            enabled: req.enabled,
            yellow_alert_players: req.yellow_alert_players,
            red_alert_players: req.red_alert_players,
            time_window_minutes: req.time_window_minutes,
            sound_enabled: req.sound_enabled,
            cooldown_minutes: req.cooldown_minutes,
            sound_volume: req.sound_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_request_requires_fields() {
        let req = SaveNoteRequest {
            name: String::new(),
            message: "x".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_alert_config_request_bounds() {
        let req: UpdateAlertConfigRequest =
            serde_json::from_str(r#"{"enabled": true, "redAlertPlayers": 51}"#).unwrap();
        assert!(req.validate().is_err());

        let req: UpdateAlertConfigRequest =
            serde_json::from_str(r#"{"cooldownMinutes": 0, "timeWindow": 60}"#).unwrap();
        assert!(req.validate().is_ok());
        let config = AlertConfig::from(req);
        assert_eq!(config.time_window_minutes, 60);
        assert_eq!(config.cooldown_minutes, 0);
        assert_eq!(config.yellow_alert_players, 3);
    }
}
