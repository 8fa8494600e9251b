//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain and service values to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{AddExternalRequest, SaveNoteRequest, UpdateAlertConfigRequest};

// Re-export commonly used response types
pub use responses::{
    AlertConfigResponse, AlertStatusResponse, CommandResponse, CountsResponse,
    HealthChecks, HealthResponse, LevelSplitResponse, MemberResponse, NoteResponse,
    ReadinessResponse, RefreshResponse, RosterAnalysisResponse, RosterResponse,
    VocationGroupResponse,
};
