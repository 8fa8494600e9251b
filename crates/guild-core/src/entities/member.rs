//! Member entity - a tracked character (guild member or external character)

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::str::FromStr;

use super::vocation::Vocation;

/// Online status as reported by the upstream roster
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MemberStatus {
    Online,
    #[default]
    Offline,
    /// Any other raw status string; counts as online
    Other(String),
}

impl MemberStatus {
    /// Anything that is not exactly "offline" counts as online
    #[inline]
    pub fn is_online(&self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Raw status string
    pub fn as_str(&self) -> &str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for MemberStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "online" => Self::Online,
            "offline" => Self::Offline,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Tracked character
///
/// `name` is the identity key and is compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    /// Raw vocation string as reported upstream
    pub vocation: String,
    pub level: u32,
    pub status: MemberStatus,
    /// Absent for characters never observed online
    pub last_seen: Option<DateTime<Utc>>,
    pub is_exited: bool,
    pub is_external: bool,
}

impl Member {
    /// Create a new guild member with no last-seen timestamp
    pub fn new(
        name: impl Into<String>,
        vocation: impl Into<String>,
        level: u32,
        status: MemberStatus,
    ) -> Self {
        Self {
            name: name.into(),
            vocation: vocation.into(),
            level,
            status,
            last_seen: None,
            is_exited: false,
            is_external: false,
        }
    }

    /// Set the last-seen timestamp
    #[must_use]
    pub fn with_last_seen(mut self, last_seen: DateTime<Utc>) -> Self {
        self.last_seen = Some(last_seen);
        self
    }

    /// Flag the member as exited
    #[must_use]
    pub fn exited(mut self) -> Self {
        self.is_exited = true;
        self
    }

    /// Flag the member as an external character
    #[must_use]
    pub fn external(mut self) -> Self {
        self.is_external = true;
        self
    }

    /// Canonical vocation of this member
    pub fn canonical_vocation(&self) -> Vocation {
        Vocation::normalize(&self.vocation)
    }

    #[inline]
    pub fn is_online(&self) -> bool {
        self.status.is_online()
    }

    /// Main tier: `level >= threshold`; a non-positive threshold puts everyone above
    #[inline]
    pub fn is_main(&self, level_threshold: i32) -> bool {
        level_threshold <= 0 || i64::from(self.level) >= i64::from(level_threshold)
    }

    /// Whether the member was seen within `window` of `now` (inclusive)
    ///
    /// Timestamps in the future count as recent.
    pub fn seen_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.last_seen
            .is_some_and(|last_seen| now.signed_duration_since(last_seen) <= window)
    }
}
