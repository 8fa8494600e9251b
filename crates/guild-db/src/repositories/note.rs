//! PostgreSQL implementation of NoteRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::entities::MemberNote;
use guild_core::traits::{NoteRepository, RepoResult};
use guild_core::value_objects::CharacterName;

use crate::mappers::NoteInsert;
use crate::models::NoteModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NoteRepository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<MemberNote>> {
        let results = sqlx::query_as::<_, NoteModel>(
            r#"
            SELECT name, message, updated_at
            FROM member_notes
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(MemberNote::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &CharacterName) -> RepoResult<Option<MemberNote>> {
        let result = sqlx::query_as::<_, NoteModel>(
            r#"
            SELECT name, message, updated_at
            FROM member_notes
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(MemberNote::try_from).transpose()
    }

    #[instrument(skip(self, note), fields(name = %note.name))]
    async fn upsert(&self, note: &MemberNote) -> RepoResult<()> {
        let insert = NoteInsert::new(note);

        sqlx::query(
            r#"
            INSERT INTO member_notes (name, message, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO UPDATE
            SET message = EXCLUDED.message, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(insert.name)
        .bind(insert.message)
        .bind(note.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &CharacterName) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM member_notes
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
