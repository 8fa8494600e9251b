//! Service context - dependency container for services
//!
//! Holds the repositories, upstream ports, the notifier and the shared
//! runtime state needed by services.

use std::sync::Arc;

use guild_core::traits::{AlertSettingsRepository, NoteRepository, RosterCommands, RosterSource};
use guild_core::DEFAULT_LEVEL_THRESHOLD;
use guild_db::PgPool;

use super::error::{ServiceError, ServiceResult};
use super::state::{RosterView, SharedState};
use crate::notify::{LogNotifier, Notifier};

/// Service context containing all dependencies
///
/// Cloning is cheap; every clone shares the same runtime state, so the
/// monitor task and the HTTP handlers observe one roster and one alert.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool, absent when running on in-memory storage
    pool: Option<PgPool>,

    // Repositories
    note_repo: Arc<dyn NoteRepository>,
    alert_settings_repo: Arc<dyn AlertSettingsRepository>,

    // Upstream
    roster_source: Arc<dyn RosterSource>,
    roster_commands: Arc<dyn RosterCommands>,

    notifier: Arc<dyn Notifier>,
    level_threshold: i32,

    state: Arc<SharedState>,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if one is configured
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the note repository
    pub fn note_repo(&self) -> &dyn NoteRepository {
        self.note_repo.as_ref()
    }

    /// Get the alert settings repository
    pub fn alert_settings_repo(&self) -> &dyn AlertSettingsRepository {
        self.alert_settings_repo.as_ref()
    }

    // === Upstream ===

    /// Get the roster source
    pub fn roster_source(&self) -> &dyn RosterSource {
        self.roster_source.as_ref()
    }

    /// Get the roster command sink
    pub fn roster_commands(&self) -> &dyn RosterCommands {
        self.roster_commands.as_ref()
    }

    // === Alerts ===

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    /// Level separating main characters from low-tier ones
    pub fn level_threshold(&self) -> i32 {
        self.level_threshold
    }

    // === Runtime State ===

    /// Snapshot of the current roster view
    pub fn roster_view(&self) -> RosterView {
        self.state.roster.read().clone()
    }

    /// Whether a refresh cycle is currently running
    pub fn is_refreshing(&self) -> bool {
        self.state.is_refreshing()
    }

    /// Whether shutdown has begun; late cycle results are discarded
    pub fn is_shutting_down(&self) -> bool {
        self.state.is_shutting_down()
    }

    pub(crate) fn begin_shutdown(&self) {
        self.state.begin_shutdown();
    }

    pub(crate) fn state(&self) -> &SharedState {
        &self.state
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("upstream", &"...")
            .field("level_threshold", &self.level_threshold)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    note_repo: Option<Arc<dyn NoteRepository>>,
    alert_settings_repo: Option<Arc<dyn AlertSettingsRepository>>,
    roster_source: Option<Arc<dyn RosterSource>>,
    roster_commands: Option<Arc<dyn RosterCommands>>,
    notifier: Option<Arc<dyn Notifier>>,
    level_threshold: i32,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            note_repo: None,
            alert_settings_repo: None,
            roster_source: None,
            roster_commands: None,
            notifier: None,
            level_threshold: DEFAULT_LEVEL_THRESHOLD,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn note_repo(mut self, repo: Arc<dyn NoteRepository>) -> Self {
        self.note_repo = Some(repo);
        self
    }

    pub fn alert_settings_repo(mut self, repo: Arc<dyn AlertSettingsRepository>) -> Self {
        self.alert_settings_repo = Some(repo);
        self
    }

    pub fn roster_source(mut self, source: Arc<dyn RosterSource>) -> Self {
        self.roster_source = Some(source);
        self
    }

    pub fn roster_commands(mut self, commands: Arc<dyn RosterCommands>) -> Self {
        self.roster_commands = Some(commands);
        self
    }

    /// Defaults to a `LogNotifier`
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn level_threshold(mut self, level_threshold: i32) -> Self {
        self.level_threshold = level_threshold;
        self
    }

    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            note_repo: self
                .note_repo
                .ok_or_else(|| ServiceError::validation("note_repo is required"))?,
            alert_settings_repo: self
                .alert_settings_repo
                .ok_or_else(|| ServiceError::validation("alert_settings_repo is required"))?,
            roster_source: self
                .roster_source
                .ok_or_else(|| ServiceError::validation("roster_source is required"))?,
            roster_commands: self
                .roster_commands
                .ok_or_else(|| ServiceError::validation("roster_commands is required"))?,
            notifier: self.notifier.unwrap_or_else(|| Arc::new(LogNotifier)),
            level_threshold: self.level_threshold,
            state: Arc::new(SharedState::default()),
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
