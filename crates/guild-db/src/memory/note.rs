//! In-memory implementation of NoteRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

use guild_core::entities::MemberNote;
use guild_core::traits::{NoteRepository, RepoResult};
use guild_core::value_objects::CharacterName;

/// Notes kept in a name-ordered map
#[derive(Debug, Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<BTreeMap<CharacterName, MemberNote>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.read().is_empty()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn find_all(&self) -> RepoResult<Vec<MemberNote>> {
        Ok(self.notes.read().values().cloned().collect())
    }

    async fn find_by_name(&self, name: &CharacterName) -> RepoResult<Option<MemberNote>> {
        Ok(self.notes.read().get(name).cloned())
    }

    async fn upsert(&self, note: &MemberNote) -> RepoResult<()> {
        self.notes.write().insert(note.name.clone(), note.clone());
        Ok(())
    }

    async fn delete(&self, name: &CharacterName) -> RepoResult<bool> {
        Ok(self.notes.write().remove(name).is_some())
    }
}
