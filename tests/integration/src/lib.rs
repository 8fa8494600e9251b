//! Integration test utilities for the guild tracker
//!
//! This crate provides a stub upstream tracker and helpers for running
//! end-to-end tests against the REST API.

pub mod fixtures;
pub mod helpers;
pub mod upstream;

pub use fixtures::*;
pub use helpers::*;
pub use upstream::StubUpstream;
