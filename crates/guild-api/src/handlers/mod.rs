//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod alerts;
pub mod external;
pub mod health;
pub mod members;
pub mod notes;
pub mod roster;
