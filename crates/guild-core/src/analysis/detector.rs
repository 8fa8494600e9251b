//! Mass-login detector
//!
//! Counts members whose `last_seen` falls inside the configured window and
//! maps the count onto an alert level. Only red may request sound, and the
//! cooldown gate decides whether that request is honoured.

use chrono::{DateTime, Duration, Utc};
use validator::Validate;

use crate::entities::{AlertConfig, AlertLevel, AlertState, Member};

/// What the coordinator should do about audio after an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundDecision {
    Play { volume: u8 },
    /// Red, but a notification played too recently
    SuppressedByCooldown,
    /// Red, but sound is switched off
    Muted,
    NotRequired,
}

/// Outcome of one detector run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub level: AlertLevel,
    pub recent_count: usize,
    pub sound: SoundDecision,
}

impl Evaluation {
    fn quiet(level: AlertLevel, recent_count: usize) -> Self {
        Self {
            level,
            recent_count,
            sound: SoundDecision::NotRequired,
        }
    }

    /// Volume to play at, if playback was requested
    pub fn play_volume(&self) -> Option<u8> {
        match self.sound {
            SoundDecision::Play { volume } => Some(volume),
            _ => None,
        }
    }
}

/// Members seen within `window` of `now`; the boundary counts
pub fn count_recent_logins(members: &[Member], now: DateTime<Utc>, window: Duration) -> usize {
    members.iter().filter(|m| m.seen_within(now, window)).count()
}

/// Evaluate the detector over `members`
///
/// `members` is the active online list produced by the classifier. An
/// invalid configuration evaluates to `none` rather than failing.
pub fn evaluate(
    members: &[Member],
    config: &AlertConfig,
    now: DateTime<Utc>,
    state: &AlertState,
) -> Evaluation {
    let recent_count = count_recent_logins(members, now, config.time_window());

    if !config.enabled || config.validate().is_err() {
        return Evaluation::quiet(AlertLevel::None, recent_count);
    }

    let count = u64::try_from(recent_count).unwrap_or(u64::MAX);
    if count >= u64::from(config.red_alert_players) {
        let sound = if !config.sound_enabled {
            SoundDecision::Muted
        } else if state.is_on_cooldown(config, now) {
            SoundDecision::SuppressedByCooldown
        } else {
            SoundDecision::Play {
                volume: config.sound_volume,
            }
        };
        return Evaluation {
            level: AlertLevel::Red,
            recent_count,
            sound,
        };
    }

    if count >= u64::from(config.yellow_alert_players) {
        return Evaluation::quiet(AlertLevel::Yellow, recent_count);
    }

    Evaluation::quiet(AlertLevel::None, recent_count)
}
