//! Roster service - the fetch, classify, evaluate cycle

use chrono::Utc;
use guild_core::{classify, Evaluation, RosterSnapshot};
use tracing::{debug, info, instrument, warn};

use super::alert::AlertService;
use super::context::ServiceContext;
use super::state::RosterView;

/// Result of one refresh cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fresh snapshot stored and evaluated
    Completed { evaluation: Evaluation },
    /// Another cycle was already running
    Skipped,
    /// Fetch failed; the previous snapshot, if any, was re-evaluated
    Failed {
        error: String,
        evaluation: Option<Evaluation>,
    },
    /// Finished after shutdown began; nothing was applied
    Discarded,
}

impl CycleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed { .. } => "completed",
            Self::Skipped => "skipped",
            Self::Failed { .. } => "failed",
            Self::Discarded => "discarded",
        }
    }

    pub fn evaluation(&self) -> Option<&Evaluation> {
        match self {
            Self::Completed { evaluation } => Some(evaluation),
            Self::Failed { evaluation, .. } => evaluation.as_ref(),
            Self::Skipped | Self::Discarded => None,
        }
    }
}

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current roster view
    pub fn current(&self) -> RosterView {
        self.ctx.roster_view()
    }

    /// Run one cycle now
    ///
    /// Never queues: a call made while another cycle runs returns `Skipped`.
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> CycleOutcome {
        let Some(_guard) = self.ctx.state().try_begin_refresh() else {
            debug!("Refresh already in flight, skipping");
            return CycleOutcome::Skipped;
        };

        let fetched = self.ctx.roster_source().fetch_roster().await;

        if self.ctx.is_shutting_down() {
            debug!("Shutdown in progress, discarding cycle result");
            return CycleOutcome::Discarded;
        }

        let now = Utc::now();
        match fetched {
            Ok(snapshot) => {
                let analysis = classify(
                    &snapshot.guild_members,
                    &snapshot.external_characters,
                    self.ctx.level_threshold(),
                );
                let active = analysis.sorted.clone();

                info!(
                    guild = %snapshot.guild_name,
                    online = analysis.counts.online,
                    total = analysis.counts.total,
                    external = analysis.counts.external,
                    "Roster refreshed"
                );

                *self.ctx.state().roster.write() = RosterView {
                    snapshot: Some(snapshot),
                    analysis: Some(analysis),
                    fetched_at: Some(now),
                    last_error: None,
                };

                let evaluation = AlertService::new(self.ctx).evaluate_members(&active, now);
                CycleOutcome::Completed { evaluation }
            }
            Err(e) => {
                warn!(error = %e, "Roster fetch failed, keeping last snapshot");
                let error = e.to_string();
                self.ctx.state().roster.write().last_error = Some(error.clone());

                let evaluation = AlertService::new(self.ctx).reevaluate(now);
                CycleOutcome::Failed { error, evaluation }
            }
        }
    }

    /// Apply an optimistic change to the last-good snapshot and reclassify
    ///
    /// Returns `false` when no snapshot has been fetched yet.
    pub(crate) fn update_snapshot<F>(&self, update: F) -> bool
    where
        F: FnOnce(RosterSnapshot) -> RosterSnapshot,
    {
        let mut view = self.ctx.state().roster.write();
        let Some(snapshot) = view.snapshot.take() else {
            return false;
        };

        let snapshot = update(snapshot);
        view.analysis = Some(classify(
            &snapshot.guild_members,
            &snapshot.external_characters,
            self.ctx.level_threshold(),
        ));
        view.snapshot = Some(snapshot);
        true
    }
}
