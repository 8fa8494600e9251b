//! Background roster monitor
//!
//! One task per process ticks on a fixed interval and runs a refresh cycle
//! per tick. Shutdown goes through a watch channel; a cycle still running
//! when shutdown arrives is dropped and its result never applied.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::services::{AlertService, CycleOutcome, RosterService, ServiceContext};

/// Spawns the polling loop
pub struct RosterMonitor;

impl RosterMonitor {
    /// Start polling; the first cycle runs immediately
    pub fn spawn(ctx: ServiceContext, poll_interval: Duration) -> MonitorHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(run(ctx.clone(), poll_interval, shutdown_rx));

        info!(interval_secs = poll_interval.as_secs(), "Roster monitor started");
        MonitorHandle {
            ctx,
            shutdown_tx,
            task,
        }
    }
}

/// Handle to a running monitor
pub struct MonitorHandle {
    ctx: ServiceContext,
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl MonitorHandle {
    /// Stop the timer, wait for the loop to exit and let a pending
    /// notification finish
    pub async fn shutdown(self) {
        self.ctx.begin_shutdown();
        let _ = self.shutdown_tx.send(true);

        if let Err(e) = self.task.await {
            warn!(error = %e, "Roster monitor task ended abnormally");
        }
        AlertService::new(&self.ctx).wait_for_playback().await;
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl std::fmt::Debug for MonitorHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorHandle")
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

async fn run(ctx: ServiceContext, poll_interval: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = shutdown_rx.changed() => break,
            _ = ticker.tick() => {}
        }

        let service = RosterService::new(&ctx);
        tokio::select! {
            _ = shutdown_rx.changed() => break,
            outcome = service.refresh() => match outcome {
                CycleOutcome::Failed { error, .. } => debug!(%error, "Cycle failed"),
                other => debug!(outcome = other.as_str(), "Cycle finished"),
            },
        }
    }

    info!("Roster monitor stopped");
}
