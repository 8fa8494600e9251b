//! Upstream client errors

use guild_core::DomainError;

/// Error talking to the upstream tracker
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("Failed to decode upstream response: {0}")]
    Decode(String),
}

impl UpstreamError {
    /// Whether retrying the same request later may succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::Build(_) | Self::InvalidUrl(_) | Self::Decode(_) => false,
        }
    }
}

/// Result type for upstream operations
pub type UpstreamResult<T> = Result<T, UpstreamError>;

impl From<UpstreamError> for DomainError {
    fn from(err: UpstreamError) -> Self {
        DomainError::UpstreamError(err.to_string())
    }
}
