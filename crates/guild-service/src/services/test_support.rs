//! Fakes shared by the service tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use guild_core::{
    classify, CharacterName, DomainError, Member, MemberStatus, RepoResult, RosterCommands,
    RosterSnapshot, RosterSource,
};
use guild_db::{MemoryAlertSettingsRepository, MemoryNoteRepository};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::Notify;

use super::context::{ServiceContext, ServiceContextBuilder};
use super::state::RosterView;
use crate::notify::{Notifier, NotifyError};

pub fn recent(n: usize, now: DateTime<Utc>, minutes_ago: i64) -> Vec<Member> {
    (0..n)
        .map(|i| {
            Member::new(format!("Member {i}"), "Elite Knight", 200, MemberStatus::Online)
                .with_last_seen(now - Duration::minutes(minutes_ago))
        })
        .collect()
}

pub fn guild_snapshot() -> RosterSnapshot {
    RosterSnapshot::new(
        "Red Rose",
        vec![
            Member::new("Alpha", "Elder Druid", 300, MemberStatus::Online),
            Member::new("Beta", "Knight", 80, MemberStatus::Online),
            Member::new("Gamma", "Royal Paladin", 150, MemberStatus::Offline),
        ],
        vec![Member::new("Scout", "Sorcerer", 60, MemberStatus::Online)],
    )
}

#[derive(Default)]
pub struct FakeRosterSource {
    next: Mutex<Option<Result<RosterSnapshot, String>>>,
    gate: Mutex<Option<Arc<Notify>>>,
    fetches: AtomicUsize,
}

impl FakeRosterSource {
    pub fn set_roster(&self, snapshot: RosterSnapshot) {
        *self.next.lock() = Some(Ok(snapshot));
    }

    pub fn set_failure(&self, message: &str) {
        *self.next.lock() = Some(Err(message.to_string()));
    }

    /// Block fetches until the returned gate is notified
    pub fn hold(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RosterSource for FakeRosterSource {
    async fn fetch_roster(&self) -> RepoResult<RosterSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        match self.next.lock().clone() {
            Some(Ok(snapshot)) => Ok(snapshot),
            Some(Err(message)) => Err(DomainError::UpstreamError(message)),
            None => Err(DomainError::UpstreamError("no roster configured".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingCommands {
    calls: Mutex<Vec<(&'static str, String)>>,
    fail: AtomicBool,
}

impl RecordingCommands {
    pub fn calls(&self) -> Vec<(&'static str, String)> {
        self.calls.lock().clone()
    }

    pub fn fail(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }

    fn record(&self, command: &'static str, name: &CharacterName) -> RepoResult<()> {
        self.calls.lock().push((command, name.as_str().to_string()));
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::UpstreamError("backend unavailable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RosterCommands for RecordingCommands {
    async fn mark_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("mark_exited", name)
    }

    async fn unmark_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("unmark_exited", name)
    }

    async fn mark_external_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("mark_external_exited", name)
    }

    async fn unmark_external_exited(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("unmark_external_exited", name)
    }

    async fn add_external(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("add_external", name)
    }

    async fn remove_external(&self, name: &CharacterName) -> RepoResult<()> {
        self.record("remove_external", name)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    plays: Mutex<Vec<u8>>,
    fail_next: AtomicBool,
    delay: Mutex<Option<std::time::Duration>>,
}

impl RecordingNotifier {
    pub fn plays(&self) -> Vec<u8> {
        self.plays.lock().clone()
    }

    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }

    /// Make every later playback take `delay` before it completes
    pub fn set_delay(&self, delay: std::time::Duration) {
        *self.delay.lock() = Some(delay);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn play(&self, volume: u8) -> Result<(), NotifyError> {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(NotifyError::EmptyCommand);
        }
        self.plays.lock().push(volume);
        Ok(())
    }
}

pub struct TestHarness {
    pub ctx: ServiceContext,
    pub notes: Arc<MemoryNoteRepository>,
    pub settings: Arc<MemoryAlertSettingsRepository>,
    pub source: Arc<FakeRosterSource>,
    pub commands: Arc<RecordingCommands>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self::with_settings(MemoryAlertSettingsRepository::new())
    }

    pub fn with_settings_document(document: Value) -> Self {
        Self::with_settings(MemoryAlertSettingsRepository::with_document(document))
    }

    fn with_settings(settings: MemoryAlertSettingsRepository) -> Self {
        let notes = Arc::new(MemoryNoteRepository::new());
        let settings = Arc::new(settings);
        let source = Arc::new(FakeRosterSource::default());
        let commands = Arc::new(RecordingCommands::default());
        let notifier = Arc::new(RecordingNotifier::default());

        let ctx = ServiceContextBuilder::new()
            .note_repo(notes.clone())
            .alert_settings_repo(settings.clone())
            .roster_source(source.clone())
            .roster_commands(commands.clone())
            .notifier(notifier.clone())
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            notes,
            settings,
            source,
            commands,
            notifier,
        }
    }

    /// Install a roster view as if a refresh had just completed
    pub fn set_analysis(&self, guild_members: &[Member]) {
        let snapshot = RosterSnapshot::new("Guild", guild_members.to_vec(), Vec::new());
        let analysis = classify(&snapshot.guild_members, &[], self.ctx.level_threshold());
        *self.ctx.state().roster.write() = RosterView {
            snapshot: Some(snapshot),
            analysis: Some(analysis),
            fetched_at: Some(Utc::now()),
            last_error: None,
        };
    }
}
