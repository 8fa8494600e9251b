//! Wire format of the upstream tracker and its mapping onto domain entities

mod mappers;
mod models;

pub use models::{AddExternalRequest, CombinedDataResponse, GuildPayload, WireMember};
