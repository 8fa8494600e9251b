//! Shared runtime state behind the service context
//!
//! Locks guard plain data only and are never held across an `.await`.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use guild_core::{AlertConfig, AlertState, Evaluation, RosterAnalysis, RosterSnapshot};
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

/// Last-good roster plus the outcome of the most recent fetch
#[derive(Debug, Clone, Default)]
pub struct RosterView {
    pub snapshot: Option<RosterSnapshot>,
    pub analysis: Option<RosterAnalysis>,
    /// When `snapshot` was fetched
    pub fetched_at: Option<DateTime<Utc>>,
    /// Message of the last failed fetch, cleared on success
    pub last_error: Option<String>,
}

impl RosterView {
    /// A failed fetch left an older snapshot in place
    pub fn is_stale(&self) -> bool {
        self.snapshot.is_some() && self.last_error.is_some()
    }
}

#[derive(Debug, Default)]
pub(crate) struct AlertRuntime {
    pub config: AlertConfig,
    pub state: AlertState,
    pub last_evaluation: Option<Evaluation>,
    pub evaluated_at: Option<DateTime<Utc>>,
    /// Notification task started by the last `Play` decision
    pub playback: Option<JoinHandle<()>>,
}

#[derive(Debug, Default)]
pub(crate) struct SharedState {
    pub roster: RwLock<RosterView>,
    pub alert: Mutex<AlertRuntime>,
    refreshing: AtomicBool,
    shutting_down: AtomicBool,
}

impl SharedState {
    /// Claim the refresh slot; `None` while another cycle runs
    pub fn try_begin_refresh(&self) -> Option<RefreshGuard<'_>> {
        self.refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshGuard {
                flag: &self.refreshing,
            })
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }

    pub fn begin_shutdown(&self) {
        self.shutting_down.store(true, Ordering::Release);
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutting_down.load(Ordering::Acquire)
    }
}

/// Releases the refresh slot on drop, including when the cycle is cancelled
pub(crate) struct RefreshGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
