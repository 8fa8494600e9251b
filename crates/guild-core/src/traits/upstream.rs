//! Upstream tracker ports
//!
//! The roster is owned by a remote backend. `RosterSource` pulls it and
//! `RosterCommands` sends operator mutations that the next pull reconciles.

use async_trait::async_trait;

use super::repositories::RepoResult;
use crate::entities::RosterSnapshot;
use crate::value_objects::CharacterName;

#[async_trait]
pub trait RosterSource: Send + Sync {
    /// Fetch the combined guild and external-character roster
    async fn fetch_roster(&self) -> RepoResult<RosterSnapshot>;
}

#[async_trait]
pub trait RosterCommands: Send + Sync {
    async fn mark_exited(&self, name: &CharacterName) -> RepoResult<()>;

    async fn unmark_exited(&self, name: &CharacterName) -> RepoResult<()>;

    async fn mark_external_exited(&self, name: &CharacterName) -> RepoResult<()>;

    async fn unmark_external_exited(&self, name: &CharacterName) -> RepoResult<()>;

    async fn add_external(&self, name: &CharacterName) -> RepoResult<()>;

    async fn remove_external(&self, name: &CharacterName) -> RepoResult<()>;
}
