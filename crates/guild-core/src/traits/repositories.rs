//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{AlertConfig, MemberNote};
use crate::error::DomainError;
use crate::value_objects::CharacterName;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Note Repository
// ============================================================================

#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List all notes, ordered by name
    async fn find_all(&self) -> RepoResult<Vec<MemberNote>>;

    /// Find the note attached to a name
    async fn find_by_name(&self, name: &CharacterName) -> RepoResult<Option<MemberNote>>;

    /// Insert or replace the note for `note.name`
    async fn upsert(&self, note: &MemberNote) -> RepoResult<()>;

    /// Delete a note; returns whether one existed
    async fn delete(&self, name: &CharacterName) -> RepoResult<bool>;
}

// ============================================================================
// Alert Settings Repository
// ============================================================================

#[async_trait]
pub trait AlertSettingsRepository: Send + Sync {
    /// Load the stored configuration
    ///
    /// `Ok(None)` when nothing was saved yet. A stored document that cannot
    /// be decoded is reported as `DomainError::InvalidConfiguration`.
    async fn load_config(&self) -> RepoResult<Option<AlertConfig>>;

    /// Overwrite the stored configuration
    async fn save_config(&self, config: &AlertConfig) -> RepoResult<()>;

    /// Load the time of the last played notification
    async fn load_last_fired(&self) -> RepoResult<Option<DateTime<Utc>>>;

    /// Store (or clear) the time of the last played notification
    async fn save_last_fired(&self, at: Option<DateTime<Utc>>) -> RepoResult<()>;
}
