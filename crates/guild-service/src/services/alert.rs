//! Alert service - owns the mass-login alert state and configuration
//!
//! Runs the detector and plays the notification through the injected
//! `Notifier` on a background task. A `Play` decision claims the cooldown
//! anchor under the same lock as the gate check; a failed or timed-out
//! playback rolls it back, and only a successful one is persisted.

use chrono::{DateTime, Duration, Utc};
use guild_core::{
    evaluate, AlertConfig, AlertLevel, AlertState, DomainError, Evaluation, Member, SoundDecision,
};
use tokio::time::timeout;
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Upper bound for one notification; the process is killed past it
pub const PLAYBACK_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Alert status as exposed to the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertStatus {
    pub level: AlertLevel,
    pub recent_count: usize,
    pub enabled: bool,
    /// Sound decision of the last evaluation
    pub sound: Option<SoundDecision>,
    pub on_cooldown: bool,
    pub cooldown_remaining: Option<Duration>,
    pub last_fired_at: Option<DateTime<Utc>>,
    pub evaluated_at: Option<DateTime<Utc>>,
}

/// Alert service
pub struct AlertService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AlertService<'a> {
    /// Create a new AlertService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load the stored configuration and cooldown anchor into memory
    ///
    /// Missing, unreadable or invalid configuration falls back to defaults.
    #[instrument(skip(self))]
    pub async fn load(&self) -> AlertConfig {
        let config = match self.ctx.alert_settings_repo().load_config().await {
            Ok(Some(config)) => match config.validate() {
                Ok(()) => config,
                Err(e) => {
                    warn!(error = %e, "Stored alert configuration is invalid, using defaults");
                    AlertConfig::default()
                }
            },
            Ok(None) => AlertConfig::default(),
            Err(e) => {
                warn!(error = %e, "Failed to load alert configuration, using defaults");
                AlertConfig::default()
            }
        };

        let last_fired_at = self
            .ctx
            .alert_settings_repo()
            .load_last_fired()
            .await
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load last notification time");
                None
            });

        {
            let mut runtime = self.ctx.state().alert.lock();
            runtime.config = config.clone();
            runtime.state = AlertState::with_last_fired(last_fired_at);
        }

        info!(enabled = config.enabled, "Alert configuration loaded");
        config
    }

    /// Current configuration
    pub fn config(&self) -> AlertConfig {
        self.ctx.state().alert.lock().config.clone()
    }

    /// Validate and apply a new configuration, then re-level the roster
    ///
    /// Only the level and count follow the new configuration here; sound is
    /// left to the next cycle over a fresh snapshot.
    #[instrument(skip(self, config))]
    pub async fn save_config(&self, config: AlertConfig) -> ServiceResult<AlertConfig> {
        config.validate().map_err(DomainError::from)?;

        self.ctx.state().alert.lock().config = config.clone();
        if let Err(e) = self.ctx.alert_settings_repo().save_config(&config).await {
            warn!(error = %e, "Failed to persist alert configuration");
        }

        info!(
            enabled = config.enabled,
            yellow = config.yellow_alert_players,
            red = config.red_alert_players,
            window_minutes = config.time_window_minutes,
            "Alert configuration updated"
        );

        if let Some(members) = self.active_members() {
            self.apply(&members, Utc::now(), Playback::Skip);
        }
        Ok(config)
    }

    /// Run the detector over the active online members
    ///
    /// A `Play` decision claims the cooldown anchor before returning; the
    /// notification itself runs in the background.
    #[instrument(skip(self, members), fields(members = members.len()))]
    pub fn evaluate_members(&self, members: &[Member], now: DateTime<Utc>) -> Evaluation {
        self.apply(members, now, Playback::Allow)
    }

    /// Re-run the detector on the current analysis, if any
    pub fn reevaluate(&self, now: DateTime<Utc>) -> Option<Evaluation> {
        let members = self.active_members()?;
        Some(self.evaluate_members(&members, now))
    }

    /// Wait for the notification started by the last evaluation, if any
    pub async fn wait_for_playback(&self) {
        let handle = self.ctx.state().alert.lock().playback.take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "Notification task ended abnormally");
            }
        }
    }

    fn active_members(&self) -> Option<Vec<Member>> {
        self.ctx
            .state()
            .roster
            .read()
            .analysis
            .as_ref()
            .map(|analysis| analysis.sorted.clone())
    }

    fn apply(&self, members: &[Member], now: DateTime<Utc>, playback: Playback) -> Evaluation {
        // Gate check and anchor claim share one lock scope
        let (previous_level, evaluation, claim) = {
            let mut runtime = self.ctx.state().alert.lock();
            let previous_level = runtime.state.level;
            let mut evaluation = evaluate(members, &runtime.config, now, &runtime.state);

            let claim = match (evaluation.sound, playback) {
                (SoundDecision::Play { volume }, Playback::Allow) => {
                    let previous_anchor = runtime.state.last_fired_at;
                    runtime.state.record_fired(now);
                    Some((volume, previous_anchor))
                }
                (_, Playback::Skip) => {
                    evaluation.sound = runtime
                        .last_evaluation
                        .map_or(SoundDecision::NotRequired, |last| last.sound);
                    None
                }
                _ => None,
            };

            runtime.state.level = evaluation.level;
            runtime.last_evaluation = Some(evaluation);
            runtime.evaluated_at = Some(now);
            (previous_level, evaluation, claim)
        };

        if previous_level != evaluation.level {
            info!(
                from = %previous_level,
                to = %evaluation.level,
                recent = evaluation.recent_count,
                "Alert level changed"
            );
        }

        if let Some((volume, previous_anchor)) = claim {
            self.spawn_playback(volume, now, previous_anchor);
        } else if evaluation.sound == SoundDecision::SuppressedByCooldown {
            debug!("Notification suppressed by cooldown");
        }

        evaluation
    }

    /// Force the visual alert back to none until the next evaluation
    #[instrument(skip(self))]
    pub fn dismiss(&self) -> AlertStatus {
        self.ctx.state().alert.lock().state.dismiss();
        info!("Alert dismissed");
        self.status(Utc::now())
    }

    /// Clear the cooldown so the next red notification plays
    #[instrument(skip(self))]
    pub async fn reset_cooldown(&self) -> AlertStatus {
        self.ctx.state().alert.lock().state.reset_cooldown();
        if let Err(e) = self.ctx.alert_settings_repo().save_last_fired(None).await {
            warn!(error = %e, "Failed to clear last notification time");
        }
        info!("Alert cooldown reset");
        self.status(Utc::now())
    }

    /// Current alert status
    pub fn status(&self, now: DateTime<Utc>) -> AlertStatus {
        let runtime = self.ctx.state().alert.lock();
        let cooldown_remaining = runtime.state.cooldown_remaining(&runtime.config, now);
        AlertStatus {
            level: runtime.state.level,
            recent_count: runtime.last_evaluation.map_or(0, |e| e.recent_count),
            enabled: runtime.config.enabled,
            sound: runtime.last_evaluation.map(|e| e.sound),
            on_cooldown: cooldown_remaining.is_some(),
            cooldown_remaining,
            last_fired_at: runtime.state.last_fired_at,
            evaluated_at: runtime.evaluated_at,
        }
    }

    fn spawn_playback(
        &self,
        volume: u8,
        fired_at: DateTime<Utc>,
        previous_anchor: Option<DateTime<Utc>>,
    ) {
        let ctx = self.ctx.clone();
        let handle = tokio::spawn(async move {
            let result = match timeout(PLAYBACK_TIMEOUT, ctx.notifier().play(volume)).await {
                Ok(result) => result.map_err(|e| e.to_string()),
                Err(_) => Err(format!("no completion within {}s", PLAYBACK_TIMEOUT.as_secs())),
            };

            // A reset or a newer notification may have moved the anchor meanwhile
            let anchor_kept = {
                let mut runtime = ctx.state().alert.lock();
                let kept = runtime.state.last_fired_at == Some(fired_at);
                if kept && result.is_err() {
                    runtime.state.last_fired_at = previous_anchor;
                }
                kept
            };

            match result {
                Ok(()) => {
                    if anchor_kept {
                        let persisted = ctx.alert_settings_repo().save_last_fired(Some(fired_at));
                        if let Err(e) = persisted.await {
                            warn!(error = %e, "Failed to persist last notification time");
                        }
                    }
                    info!(volume, "Mass login notification played");
                }
                Err(error) => warn!(%error, "Mass login notification failed"),
            }
        });

        // An older handle is detached, not cancelled
        self.ctx.state().alert.lock().playback = Some(handle);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Playback {
    Allow,
    Skip,
}
