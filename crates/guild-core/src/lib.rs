//! # guild-core
//!
//! Domain layer containing entities, value objects, roster analysis, and the
//! ports (repository and upstream traits) implemented by infrastructure crates.
//! This crate has zero dependencies on infrastructure (database, HTTP, etc.).

pub mod analysis;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use analysis::{
    classify, count_recent_logins, evaluate, mark_exited, mark_external_exited, merge_roster,
    split_by_level, unmark_exited, unmark_external_exited, Evaluation, LevelSplit,
    RosterAnalysis, RosterCounts, SoundDecision, DEFAULT_LEVEL_THRESHOLD,
};
pub use entities::{
    AlertConfig, AlertLevel, AlertState, Member, MemberNote, MemberStatus, RosterSnapshot,
    Vocation, MAX_NOTE_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    AlertSettingsRepository, NoteRepository, RepoResult, RosterCommands, RosterSource,
};
pub use value_objects::{CharacterName, NameParseError};
