//! Setting database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the settings key/value table
#[derive(Debug, Clone, FromRow)]
pub struct SettingModel {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
