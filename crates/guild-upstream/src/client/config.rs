//! Upstream client configuration

use std::time::Duration;

/// Connection settings for the upstream tracker
#[derive(Clone)]
pub struct UpstreamClientConfig {
    /// Base URL, e.g. `http://tracker:4000`
    pub base_url: String,
    /// Sent as `X-API-Key` on every request
    pub api_key: String,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl UpstreamClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// The key is a credential; keep it out of logs
impl std::fmt::Debug for UpstreamClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl From<&guild_common::UpstreamConfig> for UpstreamClientConfig {
    fn from(config: &guild_common::UpstreamConfig) -> Self {
        Self::new(config.url.clone(), config.api_key.clone()).with_timeout(config.timeout())
    }
}
