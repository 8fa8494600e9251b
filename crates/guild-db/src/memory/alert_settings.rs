//! In-memory implementation of AlertSettingsRepository
//!
//! The configuration is kept as a JSON document, decoded on load exactly like
//! the PostgreSQL store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;

use guild_core::entities::AlertConfig;
use guild_core::traits::{AlertSettingsRepository, RepoResult};

use crate::mappers::{decode_alert_config, encode_alert_config};

#[derive(Debug, Default)]
pub struct MemoryAlertSettingsRepository {
    config: RwLock<Option<Value>>,
    last_fired: RwLock<Option<DateTime<Utc>>>,
}

impl MemoryAlertSettingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw stored document, valid or not
    pub fn with_document(document: Value) -> Self {
        Self {
            config: RwLock::new(Some(document)),
            last_fired: RwLock::new(None),
        }
    }

    /// Start with a stored cooldown anchor
    #[must_use]
    pub fn with_last_fired(self, at: DateTime<Utc>) -> Self {
        *self.last_fired.write() = Some(at);
        self
    }

    /// Currently stored cooldown anchor
    pub fn last_fired(&self) -> Option<DateTime<Utc>> {
        *self.last_fired.read()
    }
}

#[async_trait]
impl AlertSettingsRepository for MemoryAlertSettingsRepository {
    async fn load_config(&self) -> RepoResult<Option<AlertConfig>> {
        let document = self.config.read().clone();
        document.map(decode_alert_config).transpose()
    }

    async fn save_config(&self, config: &AlertConfig) -> RepoResult<()> {
        let document = encode_alert_config(config)?;
        *self.config.write() = Some(document);
        Ok(())
    }

    async fn load_last_fired(&self) -> RepoResult<Option<DateTime<Utc>>> {
        Ok(self.last_fired())
    }

    async fn save_last_fired(&self, at: Option<DateTime<Utc>>) -> RepoResult<()> {
        *self.last_fired.write() = at;
        Ok(())
    }
}
