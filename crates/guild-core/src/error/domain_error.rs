//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::NameParseError;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid character name: {0}")]
    InvalidName(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Invalid alert configuration: {0}")]
    InvalidConfiguration(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::NoteNotFound(_) => "UNKNOWN_NOTE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidName(_) => "INVALID_NAME",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",

            // Infrastructure
            Self::UpstreamError(_) => "UPSTREAM_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoteNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidName(_)
                | Self::ContentTooLong { .. }
                | Self::InvalidConfiguration(_)
        )
    }

    /// Check if this wraps an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::UpstreamError(_) | Self::DatabaseError(_) | Self::InternalError(_)
        )
    }
}

impl From<NameParseError> for DomainError {
    fn from(err: NameParseError) -> Self {
        Self::InvalidName(err.to_string())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidConfiguration(errors.to_string())
    }
}
