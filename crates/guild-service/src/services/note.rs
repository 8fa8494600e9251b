//! Note service - short operator observations keyed by character name

use chrono::Utc;
use guild_core::{DomainError, MemberNote};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::exited::parse_name;

/// Note service
pub struct NoteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> NoteService<'a> {
    /// Create a new NoteService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all notes ordered by name
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<MemberNote>> {
        Ok(self.ctx.note_repo().find_all().await?)
    }

    /// Get the note attached to a name
    #[instrument(skip(self))]
    pub async fn get(&self, raw_name: &str) -> ServiceResult<MemberNote> {
        let name = parse_name(raw_name)?;
        self.ctx
            .note_repo()
            .find_by_name(&name)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::NoteNotFound(name.into_inner())))
    }

    /// Create or replace the note for a name
    ///
    /// Both the name and the message are validated before anything is stored.
    #[instrument(skip(self, message))]
    pub async fn save(&self, raw_name: &str, message: &str) -> ServiceResult<MemberNote> {
        let name = parse_name(raw_name)?;
        let note = MemberNote::new(name, message, Utc::now())?;

        self.ctx.note_repo().upsert(&note).await?;

        info!(name = %note.name, "Note saved");
        Ok(note)
    }

    /// Delete a note; deleting a missing note succeeds
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_name: &str) -> ServiceResult<bool> {
        let name = parse_name(raw_name)?;
        let deleted = self.ctx.note_repo().delete(&name).await?;

        info!(name = %name, deleted, "Note deleted");
        Ok(deleted)
    }
}
