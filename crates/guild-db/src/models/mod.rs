//! Database models - SQLx-compatible structs for PostgreSQL tables

mod note;
mod setting;

pub use note::NoteModel;
pub use setting::SettingModel;
