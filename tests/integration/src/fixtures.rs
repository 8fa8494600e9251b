//! Test fixtures and data generators
//!
//! Provides reusable upstream rosters for integration tests.

use chrono::{Duration, Utc};
use guild_upstream::{CombinedDataResponse, GuildPayload, WireMember};
use serde_json::{json, Value};

/// A guild member as the upstream tracker reports it
pub fn member(name: &str, vocation: &str, level: u32, status: &str) -> WireMember {
    WireMember {
        name: name.to_string(),
        vocation: vocation.to_string(),
        level,
        status: status.to_string(),
        ..WireMember::default()
    }
}

/// An online member that logged in `minutes_ago` minutes ago
pub fn logged_in(name: &str, vocation: &str, level: u32, minutes_ago: i64) -> WireMember {
    WireMember {
        last_seen: Some(Utc::now() - Duration::minutes(minutes_ago)),
        ..member(name, vocation, level, "online")
    }
}

/// Small guild: two online, one offline, one exited, plus one external scout
pub fn red_rose() -> CombinedDataResponse {
    CombinedDataResponse {
        guild: GuildPayload {
            name: "Red Rose".to_string(),
            members: vec![
                member("Alpha", "Elder Druid", 300, "online"),
                member("Beta", "Knight", 80, "online"),
                member("Gamma", "Royal Paladin", 150, "offline"),
                WireMember {
                    is_exited: true,
                    ..member("Delta", "Master Sorcerer", 220, "online")
                },
            ],
        },
        external_characters: vec![WireMember {
            is_external: true,
            ..member("Scout", "Sorcerer", 60, "online")
        }],
    }
}

/// Guild where `count` members logged in within the last minute
pub fn login_wave(count: usize) -> CombinedDataResponse {
    CombinedDataResponse {
        guild: GuildPayload {
            name: "Red Rose".to_string(),
            members: (0..count)
                .map(|i| logged_in(&format!("Wave{i}"), "Elite Knight", 200, 1))
                .collect(),
        },
        external_characters: Vec::new(),
    }
}

/// Alert configuration body with detection on and low thresholds
pub fn sensitive_alert_config() -> Value {
    json!({
        "enabled": true,
        "yellowAlertPlayers": 2,
        "redAlertPlayers": 3,
        "timeWindowMinutes": 5,
        "soundEnabled": true,
        "cooldownMinutes": 10,
        "soundVolume": 40
    })
}
