//! External character service - non-guild characters tracked alongside the guild

use guild_core::{mark_external_exited, unmark_external_exited, Member};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::exited::{forwarded, parse_name, CommandOutcome};
use super::roster::RosterService;

/// External character service
pub struct ExternalService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExternalService<'a> {
    /// Create a new ExternalService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// External characters of the last-good snapshot
    pub fn list(&self) -> Vec<Member> {
        self.ctx
            .roster_view()
            .snapshot
            .map(|snapshot| snapshot.external_characters)
            .unwrap_or_default()
    }

    /// Start tracking a character; a placeholder entry appears until the next poll
    #[instrument(skip(self))]
    pub async fn add(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally = RosterService::new(self.ctx).update_snapshot(|mut roster| {
            roster.add_external(name.as_str());
            roster
        });
        let forwarded = forwarded(
            "add_external",
            &name,
            self.ctx.roster_commands().add_external(&name).await,
        );

        info!(name = %name, forwarded, "External character added");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }

    /// Stop tracking a character
    #[instrument(skip(self))]
    pub async fn remove(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally = RosterService::new(self.ctx).update_snapshot(|mut roster| {
            roster.remove_external(name.as_str());
            roster
        });
        let forwarded = forwarded(
            "remove_external",
            &name,
            self.ctx.roster_commands().remove_external(&name).await,
        );

        info!(name = %name, forwarded, "External character removed");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }

    #[instrument(skip(self))]
    pub async fn mark_exited(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally = RosterService::new(self.ctx)
            .update_snapshot(|roster| mark_external_exited(roster, &name));
        let forwarded = forwarded(
            "mark_external_exited",
            &name,
            self.ctx.roster_commands().mark_external_exited(&name).await,
        );

        info!(name = %name, forwarded, "External character marked as exited");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }

    #[instrument(skip(self))]
    pub async fn unmark_exited(&self, raw_name: &str) -> ServiceResult<CommandOutcome> {
        let name = parse_name(raw_name)?;
        let applied_locally = RosterService::new(self.ctx)
            .update_snapshot(|roster| unmark_external_exited(roster, &name));
        let forwarded = forwarded(
            "unmark_external_exited",
            &name,
            self.ctx.roster_commands().unmark_external_exited(&name).await,
        );

        info!(name = %name, forwarded, "External character unmarked as exited");
        Ok(CommandOutcome {
            name,
            applied_locally,
            forwarded,
        })
    }
}
