//! Axum extractors for request handling
//!
//! Custom extractors for validation and character-name path parameters.

mod path;
mod validated;

pub use path::NamePath;
pub use validated::ValidatedJson;
