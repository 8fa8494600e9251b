//! Mass-login alert entities: level, operator configuration, and cooldown state

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Alert level reported by the mass-login detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    #[default]
    None,
    Yellow,
    Red,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Yellow => "yellow",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator-tunable mass-login thresholds
///
/// Persisted and exchanged as a whole object with camelCase keys. Missing keys
/// take their default value. Red is not validated against yellow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertConfig {
    pub enabled: bool,

    #[validate(range(min = 1, message = "yellowAlertPlayers must be at least 1"))]
    pub yellow_alert_players: u32,

    #[validate(range(min = 1, message = "redAlertPlayers must be at least 1"))]
    pub red_alert_players: u32,

    #[serde(alias = "timeWindow")]
    #[validate(range(min = 1, message = "timeWindowMinutes must be at least 1"))]
    pub time_window_minutes: u32,

    pub sound_enabled: bool,

    /// 0 disables the cooldown
    pub cooldown_minutes: u32,

    #[validate(range(max = 100, message = "soundVolume must be between 0 and 100"))]
    pub sound_volume: u8,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            yellow_alert_players: 3,
            red_alert_players: 5,
            time_window_minutes: 5,
            sound_enabled: true,
            cooldown_minutes: 10,
            sound_volume: 70,
        }
    }
}

impl AlertConfig {
    /// Trailing window in which a `last_seen` counts as a recent login
    pub fn time_window(&self) -> Duration {
        Duration::minutes(i64::from(self.time_window_minutes))
    }

    /// Minimum time between two sound notifications, `None` when disabled
    pub fn cooldown(&self) -> Option<Duration> {
        (self.cooldown_minutes > 0).then(|| Duration::minutes(i64::from(self.cooldown_minutes)))
    }
}

/// Current alert level plus the cooldown anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertState {
    pub level: AlertLevel,
    /// Set only when a red notification actually played
    pub last_fired_at: Option<DateTime<Utc>>,
}

impl AlertState {
    /// Restore state from a persisted cooldown anchor
    pub fn with_last_fired(last_fired_at: Option<DateTime<Utc>>) -> Self {
        Self {
            level: AlertLevel::None,
            last_fired_at,
        }
    }

    /// Time left before another notification may play, if any
    pub fn cooldown_remaining(&self, config: &AlertConfig, now: DateTime<Utc>) -> Option<Duration> {
        let cooldown = config.cooldown()?;
        let fired_at = self.last_fired_at?;
        let elapsed = now.signed_duration_since(fired_at);
        (elapsed < cooldown).then(|| cooldown - elapsed)
    }

    #[inline]
    pub fn is_on_cooldown(&self, config: &AlertConfig, now: DateTime<Utc>) -> bool {
        self.cooldown_remaining(config, now).is_some()
    }

    /// Record an actual playback
    pub fn record_fired(&mut self, now: DateTime<Utc>) {
        self.last_fired_at = Some(now);
    }

    /// Force-dismiss the visual alert; the cooldown anchor is kept
    pub fn dismiss(&mut self) {
        self.level = AlertLevel::None;
    }

    /// Clear the cooldown anchor so the next red fires unconditionally
    pub fn reset_cooldown(&mut self) {
        self.last_fired_at = None;
    }
}
