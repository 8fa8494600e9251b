//! MemberNote entity <-> model mapper

use guild_core::entities::MemberNote;
use guild_core::error::DomainError;
use guild_core::value_objects::CharacterName;

use crate::models::NoteModel;

/// Convert a stored row back into a note, re-checking the name
impl TryFrom<NoteModel> for MemberNote {
    type Error = DomainError;

    fn try_from(model: NoteModel) -> Result<Self, Self::Error> {
        Ok(MemberNote {
            name: CharacterName::parse(&model.name)?,
            message: model.message,
            updated_at: model.updated_at,
        })
    }
}

/// Values of a note prepared for insertion
pub struct NoteInsert<'a> {
    pub name: &'a str,
    pub message: &'a str,
}

impl<'a> NoteInsert<'a> {
    pub fn new(note: &'a MemberNote) -> Self {
        Self {
            name: note.name.as_str(),
            message: &note.message,
        }
    }
}
