//! Alert settings <-> JSON document mapper

use chrono::{DateTime, Utc};
use guild_core::entities::AlertConfig;
use guild_core::error::DomainError;
use serde_json::Value;

/// Settings key of the alert configuration document
pub const ALERT_CONFIG_KEY: &str = "alert_config";

/// Settings key of the last played notification time
pub const LAST_FIRED_KEY: &str = "alert_last_fired";

pub fn encode_alert_config(config: &AlertConfig) -> Result<Value, DomainError> {
    serde_json::to_value(config).map_err(|e| DomainError::InternalError(e.to_string()))
}

/// Decode a stored configuration; undecodable documents are reported, not defaulted
pub fn decode_alert_config(value: Value) -> Result<AlertConfig, DomainError> {
    serde_json::from_value(value).map_err(|e| DomainError::InvalidConfiguration(e.to_string()))
}

pub fn encode_last_fired(at: DateTime<Utc>) -> Value {
    Value::String(at.to_rfc3339())
}

/// Decode a stored timestamp; anything unreadable counts as never fired
pub fn decode_last_fired(value: &Value) -> Option<DateTime<Utc>> {
    value
        .as_str()
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|at| at.with_timezone(&Utc))
}
