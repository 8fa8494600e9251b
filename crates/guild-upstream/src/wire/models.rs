//! Upstream JSON payloads
//!
//! Only the consumed fields are modelled. Missing fields take defaults so a
//! partial payload still yields a usable roster.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// `GET /api/external-characters/combined-data`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombinedDataResponse {
    pub guild: GuildPayload,
    pub external_characters: Vec<WireMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildPayload {
    pub name: String,
    pub members: Vec<WireMember>,
}

/// A character as reported upstream
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WireMember {
    pub name: String,
    pub vocation: String,
    pub level: u32,
    pub status: String,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub last_seen: Option<DateTime<Utc>>,
    pub is_exited: bool,
    pub is_external: bool,
}

/// `POST /api/external-characters/add`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddExternalRequest {
    pub name: String,
}

/// Accept RFC 3339 strings; anything else (null, garbage, numbers) is absent
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|at| at.with_timezone(&Utc)))
}
