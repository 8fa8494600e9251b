//! Exited-member tracking
//!
//! Flipping the flag is the only mutation; unknown names leave the roster as is.

use crate::entities::RosterSnapshot;
use crate::value_objects::CharacterName;

/// Flag the member (guild or external) named `name` as exited
#[must_use]
pub fn mark_exited(roster: RosterSnapshot, name: &CharacterName) -> RosterSnapshot {
    set_exited(roster, name, true)
}

/// Return the member named `name` to active tracking
#[must_use]
pub fn unmark_exited(roster: RosterSnapshot, name: &CharacterName) -> RosterSnapshot {
    set_exited(roster, name, false)
}

/// Flag only the external character named `name` as exited
#[must_use]
pub fn mark_external_exited(roster: RosterSnapshot, name: &CharacterName) -> RosterSnapshot {
    set_external_exited(roster, name, true)
}

#[must_use]
pub fn unmark_external_exited(roster: RosterSnapshot, name: &CharacterName) -> RosterSnapshot {
    set_external_exited(roster, name, false)
}

fn set_exited(mut roster: RosterSnapshot, name: &CharacterName, exited: bool) -> RosterSnapshot {
    roster
        .guild_members
        .iter_mut()
        .chain(roster.external_characters.iter_mut())
        .filter(|member| name.matches(&member.name))
        .for_each(|member| member.is_exited = exited);
    roster
}

fn set_external_exited(
    mut roster: RosterSnapshot,
    name: &CharacterName,
    exited: bool,
) -> RosterSnapshot {
    roster
        .external_characters
        .iter_mut()
        .filter(|member| name.matches(&member.name))
        .for_each(|member| member.is_exited = exited);
    roster
}
