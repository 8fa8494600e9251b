//! CharacterName - the identity key of a tracked character
//!
//! Names arrive from operators and from the upstream backend with stray
//! whitespace. They are trimmed exactly once, here, and compared
//! case-sensitively everywhere else.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Trimmed, non-empty character name
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CharacterName(String);

impl CharacterName {
    /// Longest name accepted from operators
    pub const MAX_LENGTH: usize = 50;

    /// Parse a raw name, trimming surrounding whitespace
    pub fn parse(raw: &str) -> Result<Self, NameParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(NameParseError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(NameParseError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the name as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Exact, case-sensitive comparison against a raw roster name
    #[inline]
    pub fn matches(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Error when parsing a CharacterName
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameParseError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name must be at most {max} characters")]
    TooLong { max: usize },
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CharacterName {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CharacterName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CharacterName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
