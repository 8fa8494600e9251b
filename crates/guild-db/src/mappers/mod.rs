//! Entity to model mappers
//!
//! Conversions between domain entities (guild-core) and stored rows or
//! JSON documents. Stored data is re-validated on the way in.

mod note;
mod setting;

pub use note::NoteInsert;
pub use setting::{
    decode_alert_config, decode_last_fired, encode_alert_config, encode_last_fired,
    ALERT_CONFIG_KEY, LAST_FIRED_KEY,
};
