//! Ports implemented by infrastructure crates

mod repositories;
mod upstream;

pub use repositories::{AlertSettingsRepository, NoteRepository, RepoResult};
pub use upstream::{RosterCommands, RosterSource};
