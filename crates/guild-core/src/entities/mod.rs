//! Domain entities - core business objects

mod alert;
mod member;
mod note;
mod roster;
mod vocation;

pub use alert::{AlertConfig, AlertLevel, AlertState};
pub use member::{Member, MemberStatus};
pub use note::{MemberNote, MAX_NOTE_LENGTH};
pub use roster::RosterSnapshot;
pub use vocation::Vocation;
