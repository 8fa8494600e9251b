//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in guild-core.

mod alert_settings;
mod error;
mod note;

pub use alert_settings::PgAlertSettingsRepository;
pub use note::PgNoteRepository;
