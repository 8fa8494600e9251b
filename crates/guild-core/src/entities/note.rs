//! MemberNote entity - a short operator observation attached to a name

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::CharacterName;

/// Longest accepted note message, in characters
pub const MAX_NOTE_LENGTH: usize = 50;

/// Operator note, one per character name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberNote {
    pub name: CharacterName,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}

impl MemberNote {
    /// Build a note, trimming and validating the message
    pub fn new(name: CharacterName, message: &str, now: DateTime<Utc>) -> Result<Self, DomainError> {
        let message = Self::validate_message(message)?;
        Ok(Self {
            name,
            message,
            updated_at: now,
        })
    }

    /// Validate a raw message and return its trimmed form
    pub fn validate_message(message: &str) -> Result<String, DomainError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(DomainError::ValidationError(
                "note message cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_NOTE_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_NOTE_LENGTH,
            });
        }
        Ok(trimmed.to_string())
    }
}
