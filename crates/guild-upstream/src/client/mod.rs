//! Upstream HTTP client

mod config;
mod http;

pub use config::UpstreamClientConfig;
pub use http::{UpstreamClient, API_KEY_HEADER};
