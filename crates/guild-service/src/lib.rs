//! # guild-service
//!
//! Application layer: the refresh cycle, alert coordination, operator
//! mutations, notes, the background monitor and the API DTOs.

pub mod dto;
pub mod monitor;
pub mod notify;
pub mod services;

pub use monitor::{MonitorHandle, RosterMonitor};
pub use notify::{CommandNotifier, LogNotifier, Notifier, NotifyError};
pub use services::{
    AlertService, AlertStatus, CommandOutcome, CycleOutcome, ExitedService, ExternalService,
    NoteService, RosterService, RosterView, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
