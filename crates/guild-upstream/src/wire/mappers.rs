//! Wire payload -> domain entity mappers

use guild_core::entities::{Member, MemberStatus, RosterSnapshot};
use tracing::debug;

use super::models::{CombinedDataResponse, WireMember};

impl WireMember {
    /// Convert to a domain member; blank names are dropped
    fn into_member(self, external: bool) -> Option<Member> {
        let name = self.name.trim();
        if name.is_empty() {
            debug!("Dropping upstream entry without a name");
            return None;
        }

        Some(Member {
            name: name.to_string(),
            vocation: self.vocation,
            level: self.level,
            status: MemberStatus::from(self.status.as_str()),
            last_seen: self.last_seen,
            is_exited: self.is_exited,
            is_external: external,
        })
    }
}

impl From<CombinedDataResponse> for RosterSnapshot {
    fn from(payload: CombinedDataResponse) -> Self {
        RosterSnapshot {
            guild_name: payload.guild.name,
            guild_members: payload
                .guild
                .members
                .into_iter()
                .filter_map(|m| m.into_member(false))
                .collect(),
            external_characters: payload
                .external_characters
                .into_iter()
                .filter_map(|m| m.into_member(true))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::GuildPayload;

    fn wire(name: &str, status: &str) -> WireMember {
        WireMember {
            name: name.to_string(),
            vocation: "Royal Paladin".to_string(),
            level: 150,
            status: status.to_string(),
            ..WireMember::default()
        }
    }

    #[test]
    fn test_snapshot_mapping() {
        let payload = CombinedDataResponse {
            guild: GuildPayload {
                name: "Red Rose".to_string(),
                members: vec![wire("  Alpha ", "online"), wire("", "online")],
            },
            external_characters: vec![wire("Scout", "offline")],
        };

        let snapshot = RosterSnapshot::from(payload);
        assert_eq!(snapshot.guild_name, "Red Rose");
        assert_eq!(snapshot.guild_members.len(), 1);
        assert_eq!(snapshot.guild_members[0].name, "Alpha");
        assert_eq!(snapshot.guild_members[0].status, MemberStatus::Online);
        assert!(!snapshot.guild_members[0].is_external);

        assert_eq!(snapshot.external_characters.len(), 1);
        assert!(snapshot.external_characters[0].is_external);
        assert_eq!(snapshot.external_characters[0].status, MemberStatus::Offline);
    }
}
