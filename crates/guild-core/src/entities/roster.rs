//! RosterSnapshot - one pull of the upstream roster

use super::member::{Member, MemberStatus};

/// Level given to an external character added before its first poll
pub const PLACEHOLDER_LEVEL: u32 = 1;

/// Raw vocation of such a placeholder; normalizes to uncategorized
pub const PLACEHOLDER_VOCATION: &str = "None";

/// Guild members plus tracked external characters, as last fetched
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RosterSnapshot {
    pub guild_name: String,
    pub guild_members: Vec<Member>,
    pub external_characters: Vec<Member>,
}

impl RosterSnapshot {
    pub fn new(
        guild_name: impl Into<String>,
        guild_members: Vec<Member>,
        external_characters: Vec<Member>,
    ) -> Self {
        Self {
            guild_name: guild_name.into(),
            guild_members,
            external_characters,
        }
    }

    /// Whether a guild member with this exact name exists
    pub fn has_guild_member(&self, name: &str) -> bool {
        self.guild_members.iter().any(|m| m.name == name)
    }

    /// Whether an external character with this exact name exists
    pub fn has_external(&self, name: &str) -> bool {
        self.external_characters.iter().any(|m| m.name == name)
    }

    /// Add an external character placeholder until the next poll fills it in
    ///
    /// The placeholder is offline, uncategorized and at the lowest valid
    /// level. Returns `false` when the name is already tracked.
    pub fn add_external(&mut self, name: &str) -> bool {
        if self.has_external(name) {
            return false;
        }
        self.external_characters.push(
            Member::new(name, PLACEHOLDER_VOCATION, PLACEHOLDER_LEVEL, MemberStatus::Offline)
                .external(),
        );
        true
    }

    /// Drop an external character; returns whether one was removed
    pub fn remove_external(&mut self, name: &str) -> bool {
        let before = self.external_characters.len();
        self.external_characters.retain(|m| m.name != name);
        self.external_characters.len() != before
    }

    /// Total number of entries before merging
    pub fn len(&self) -> usize {
        self.guild_members.len() + self.external_characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guild_members.is_empty() && self.external_characters.is_empty()
    }
}
