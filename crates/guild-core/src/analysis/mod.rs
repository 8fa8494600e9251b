//! Roster analysis - pure classification, exited tracking, and mass-login detection

mod classifier;
mod detector;
mod exited;

pub use classifier::{
    classify, merge_roster, split_by_level, LevelSplit, RosterAnalysis, RosterCounts,
    DEFAULT_LEVEL_THRESHOLD,
};
pub use detector::{count_recent_logins, evaluate, Evaluation, SoundDecision};
pub use exited::{mark_exited, mark_external_exited, unmark_exited, unmark_external_exited};
