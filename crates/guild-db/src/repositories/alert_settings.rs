//! PostgreSQL implementation of AlertSettingsRepository
//!
//! Both values live as JSON documents in the `settings` key/value table.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::AlertConfig;
use guild_core::traits::{AlertSettingsRepository, RepoResult};

use crate::mappers::{
    decode_alert_config, decode_last_fired, encode_alert_config, encode_last_fired,
    ALERT_CONFIG_KEY, LAST_FIRED_KEY,
};
use crate::models::SettingModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AlertSettingsRepository
#[derive(Clone)]
pub struct PgAlertSettingsRepository {
    pool: PgPool,
}

impl PgAlertSettingsRepository {
    /// Create a new PgAlertSettingsRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn find(&self, key: &str) -> RepoResult<Option<SettingModel>> {
        sqlx::query_as::<_, SettingModel>(
            r#"
            SELECT key, value, updated_at
            FROM settings
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    async fn put(&self, key: &str, value: serde_json::Value) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM settings WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl AlertSettingsRepository for PgAlertSettingsRepository {
    #[instrument(skip(self))]
    async fn load_config(&self) -> RepoResult<Option<AlertConfig>> {
        self.find(ALERT_CONFIG_KEY)
            .await?
            .map(|row| decode_alert_config(row.value))
            .transpose()
    }

    #[instrument(skip(self))]
    async fn save_config(&self, config: &AlertConfig) -> RepoResult<()> {
        self.put(ALERT_CONFIG_KEY, encode_alert_config(config)?).await
    }

    #[instrument(skip(self))]
    async fn load_last_fired(&self) -> RepoResult<Option<DateTime<Utc>>> {
        Ok(self
            .find(LAST_FIRED_KEY)
            .await?
            .and_then(|row| decode_last_fired(&row.value)))
    }

    #[instrument(skip(self))]
    async fn save_last_fired(&self, at: Option<DateTime<Utc>>) -> RepoResult<()> {
        match at {
            Some(at) => self.put(LAST_FIRED_KEY, encode_last_fired(at)).await,
            None => self.remove(LAST_FIRED_KEY).await,
        }
    }
}
