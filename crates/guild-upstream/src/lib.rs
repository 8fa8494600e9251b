//! # guild-upstream
//!
//! HTTP client for the upstream tracker backend that owns the guild roster.
//!
//! ## Features
//!
//! - **Roster pull**: combined guild and external-character data
//! - **Roster commands**: exited flags and external-character membership
//!
//! ## Example
//!
//! ```ignore
//! use guild_upstream::{UpstreamClient, UpstreamClientConfig};
//! use guild_core::traits::RosterSource;
//!
//! let client = UpstreamClient::new(UpstreamClientConfig::new("http://tracker:4000", "key"))?;
//! let roster = client.fetch_roster().await?;
//! ```

pub mod client;
pub mod error;
pub mod wire;

pub use client::{UpstreamClient, UpstreamClientConfig, API_KEY_HEADER};
pub use error::{UpstreamError, UpstreamResult};
pub use wire::{CombinedDataResponse, GuildPayload, WireMember};
