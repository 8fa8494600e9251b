//! Note database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for member_notes table
#[derive(Debug, Clone, FromRow)]
pub struct NoteModel {
    pub name: String,
    pub message: String,
    pub updated_at: DateTime<Utc>,
}
