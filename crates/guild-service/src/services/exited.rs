//! Exited service - operator marks members as exited
//!
//! The local snapshot changes immediately; the upstream command follows and
//! its failure is only logged. The next poll reconciles either way.

use guild_core::{mark_exited, unmark_exited, CharacterName, DomainError, RepoResult};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::roster::RosterService;

/// What happened to an operator mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub name: CharacterName,
    /// The last-good snapshot was updated
    pub applied_locally: bool,
    /// The upstream accepted the command
    pub forwarded: bool,
}

/// Exited service
pub struct ExitedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExitedService<'a> {
    /// Create a new ExitedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark a member as exited
    #[instrument(skip(self))]
    pub async fn mark(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally =
            RosterService::new(self.ctx).update_snapshot(|roster| mark_exited(roster, &name));
        let forwarded = forwarded(
            "mark_exited",
            &name,
            self.ctx.roster_commands().mark_exited(&name).await,
        );

        info!(name = %name, applied_locally, forwarded, "Member marked as exited");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }

    /// Return a member to active tracking
    #[instrument(skip(self))]
    pub async fn unmark(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally =
            RosterService::new(self.ctx).update_snapshot(|roster| unmark_exited(roster, &name));
        let forwarded = forwarded(
            "unmark_exited",
            &name,
            self.ctx.roster_commands().unmark_exited(&name).await,
        );

        info!(name = %name, applied_locally, forwarded, "Member unmarked as exited");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }
}

pub(super) fn parse_name(raw_name: &str) -> ServiceResult<CharacterName> {
    CharacterName::parse(raw_name)
        .map_err(DomainError::from)
        .map_err(ServiceError::from)
}

/// Log a failed upstream command and report whether it went through
pub(super) fn forwarded(command: &'static str, name: &CharacterName, result: RepoResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(command, name = %name, error = %e, "Upstream command failed, next poll reconciles");
            false
        }
    }
}
