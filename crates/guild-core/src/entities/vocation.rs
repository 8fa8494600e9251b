//! Vocation - character class, collapsed onto five canonical base vocations

use std::fmt;

/// Canonical vocation, or the raw string when it cannot be mapped
///
/// Declaration order is the display order used by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Vocation {
    Druid,
    Knight,
    Sorcerer,
    Paladin,
    Monk,
    /// Unmapped raw vocation (e.g. "None"), kept verbatim
    Other(String),
}

impl Vocation {
    /// The five canonical vocations in display order
    pub const CANONICAL: [Vocation; 5] = [
        Vocation::Druid,
        Vocation::Knight,
        Vocation::Sorcerer,
        Vocation::Paladin,
        Vocation::Monk,
    ];

    /// Map a raw vocation string (base or promoted) onto a canonical vocation
    ///
    /// Matching ignores surrounding whitespace and ASCII case. Anything that
    /// does not match is returned unchanged as `Vocation::Other`.
    pub fn normalize(raw: &str) -> Self {
        let key = raw.trim();
        Self::CANONICAL
            .into_iter()
            .find(|vocation| {
                vocation
                    .aliases()
                    .iter()
                    .any(|alias| key.eq_ignore_ascii_case(alias))
            })
            .unwrap_or_else(|| Self::Other(raw.to_string()))
    }

    /// Display name of the vocation
    pub fn as_str(&self) -> &str {
        match self {
            Self::Druid => "Druid",
            Self::Knight => "Knight",
            Self::Sorcerer => "Sorcerer",
            Self::Paladin => "Paladin",
            Self::Monk => "Monk",
            Self::Other(raw) => raw,
        }
    }

    /// Promoted title that collapses onto this vocation
    pub fn promoted_title(&self) -> Option<&'static str> {
        match self {
            Self::Druid => Some("Elder Druid"),
            Self::Knight => Some("Elite Knight"),
            Self::Sorcerer => Some("Master Sorcerer"),
            Self::Paladin => Some("Royal Paladin"),
            Self::Monk => Some("Exalted Monk"),
            Self::Other(_) => None,
        }
    }

    /// Whether this is one of the five canonical vocations
    #[inline]
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    fn aliases(&self) -> [&str; 2] {
        [self.as_str(), self.promoted_title().unwrap_or_default()]
    }
}

impl fmt::Display for Vocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
