//! Value objects - immutable types that represent domain concepts

mod character_name;

pub use character_name::{CharacterName, NameParseError};
