//! # guild-db
//!
//! Persistence layer implementing the note and alert-settings repository
//! traits, with PostgreSQL via SQLx and an in-memory fallback.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use guild_db::pool::{create_pool, ensure_schema, DatabaseConfig};
//! use guild_db::PgNoteRepository;
//! use guild_core::traits::NoteRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     ensure_schema(&pool).await?;
//!     let notes = PgNoteRepository::new(pool);
//!     let all = notes.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{MemoryAlertSettingsRepository, MemoryNoteRepository};
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{PgAlertSettingsRepository, PgNoteRepository};
