//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` and orchestrates the
//! pure roster analysis with the repositories and upstream ports.

pub mod alert;
pub mod context;
pub mod error;
pub mod exited;
pub mod external;
pub mod note;
pub mod roster;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export all services for convenience
pub use alert::{AlertService, AlertStatus};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use exited::{CommandOutcome, ExitedService};
pub use external::ExternalService;
pub use note::NoteService;
pub use roster::{CycleOutcome, RosterService};
pub use state::RosterView;
