//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase
//! keys, matching the roster document the operator UI already consumes.

use chrono::{DateTime, Utc};
use guild_core::AlertLevel;
use serde::Serialize;

// ============================================================================
// Roster Responses
// ============================================================================

/// Tracked character
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub name: String,
    pub vocation: String,
    pub canonical_vocation: String,
    pub level: u32,
    pub status: String,
    pub last_seen: Option<DateTime<Utc>>,
    pub is_exited: bool,
    pub is_external: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LevelSplitResponse {
    pub above: Vec<MemberResponse>,
    pub below: Vec<MemberResponse>,
}

/// Members of one canonical vocation, in display order
#[derive(Debug, Clone, Serialize)]
pub struct VocationGroupResponse {
    pub vocation: String,
    pub members: Vec<MemberResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiers: Option<LevelSplitResponse>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountsResponse {
    pub online: usize,
    pub offline: usize,
    pub total: usize,
    pub external: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterAnalysisResponse {
    pub counts: CountsResponse,
    pub level_threshold: i32,
    pub vocations: Vec<VocationGroupResponse>,
    pub exited_vocations: Vec<VocationGroupResponse>,
    pub by_level: LevelSplitResponse,
    pub exited_by_level: LevelSplitResponse,
    pub sorted: Vec<MemberResponse>,
    pub exited_sorted: Vec<MemberResponse>,
    pub external_characters: Vec<MemberResponse>,
}

/// Current roster view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub guild_name: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    /// The analysis belongs to an older snapshot than the last fetch attempt
    pub stale: bool,
    pub refreshing: bool,
    pub analysis: Option<RosterAnalysisResponse>,
}

/// Result of a manual refresh
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// `completed`, `skipped`, `failed` or `discarded`
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<AlertLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of an operator mutation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResponse {
    pub name: String,
    pub applied_locally: bool,
    pub forwarded: bool,
}

// ============================================================================
// Note Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub name: String,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Alert Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertStatusResponse {
    pub level: AlertLevel,
    pub recent_count: usize,
    pub enabled: bool,
    /// Sound decision of the last evaluation
    pub sound: Option<String>,
    pub on_cooldown: bool,
    pub cooldown_remaining_seconds: Option<i64>,
    pub last_fired_at: Option<DateTime<Utc>>,
    pub evaluated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertConfigResponse {
    pub enabled: bool,
    pub yellow_alert_players: u32,
    pub red_alert_players: u32,
    pub time_window_minutes: u32,
    pub sound_enabled: bool,
    pub cooldown_minutes: u32,
    pub sound_volume: u8,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    /// `healthy`, `unhealthy` or `disabled` when running in memory
    pub database: String,
    /// `healthy`, `unhealthy` or `pending` before the first fetch
    pub upstream: String,
}

impl ReadinessResponse {
    /// `None` means the check does not apply yet
    pub fn ready(database_healthy: Option<bool>, upstream_healthy: Option<bool>) -> Self {
        let all_healthy = database_healthy != Some(false) && upstream_healthy != Some(false);
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: check_label(database_healthy, "disabled"),
                upstream: check_label(upstream_healthy, "pending"),
            },
        }
    }
}

fn check_label(healthy: Option<bool>, absent: &str) -> String {
    match healthy {
        Some(true) => "healthy",
        Some(false) => "unhealthy",
        None => absent,
    }
    .to_string()
}
