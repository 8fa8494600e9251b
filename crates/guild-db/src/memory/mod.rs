//! In-memory repositories
//!
//! Used when no `DATABASE_URL` is configured and by service tests. State is
//! lost on restart.

mod alert_settings;
mod note;

pub use alert_settings::MemoryAlertSettingsRepository;
pub use note::MemoryNoteRepository;
