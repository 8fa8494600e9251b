//! Roster classifier
//!
//! Turns the raw guild and external lists into the structure the operator
//! views and the detector consumes. Every function here is pure.

use std::collections::{BTreeMap, HashSet};

use crate::entities::{Member, Vocation};

/// Level threshold separating main characters from low-tier ones
pub const DEFAULT_LEVEL_THRESHOLD: i32 = 100;

/// Members split around a level threshold, order preserved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSplit {
    /// `level >= threshold`
    pub above: Vec<Member>,
    pub below: Vec<Member>,
}

impl LevelSplit {
    pub fn len(&self) -> usize {
        self.above.len() + self.below.len()
    }

    pub fn is_empty(&self) -> bool {
        self.above.is_empty() && self.below.is_empty()
    }
}

/// Headline counts over the merged roster, exited members included
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterCounts {
    pub online: usize,
    pub offline: usize,
    pub total: usize,
    pub external: usize,
}

/// Result of classifying one roster snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterAnalysis {
    pub counts: RosterCounts,
    pub level_threshold: i32,
    /// Active online members per canonical vocation, level descending
    pub vocations: BTreeMap<Vocation, Vec<Member>>,
    /// `vocations`, each group split by level
    pub vocation_tiers: BTreeMap<Vocation, LevelSplit>,
    /// Exited members per canonical vocation, any status
    pub exited_vocations: BTreeMap<Vocation, Vec<Member>>,
    pub by_level: LevelSplit,
    pub exited_by_level: LevelSplit,
    /// All active online members, level descending then name
    pub sorted: Vec<Member>,
    pub exited_sorted: Vec<Member>,
    /// External entries kept after merging
    pub external_characters: Vec<Member>,
}

/// Merge guild members with external characters
///
/// Guild entries come first. An entry whose name was already seen is dropped,
/// so an external character colliding with a guild member never shows up.
pub fn merge_roster(guild_members: &[Member], external_characters: &[Member]) -> Vec<Member> {
    let mut seen = HashSet::with_capacity(guild_members.len() + external_characters.len());
    let guild = guild_members.iter().cloned();
    let external = external_characters.iter().cloned().map(Member::external);

    guild
        .chain(external)
        .filter(|member| seen.insert(member.name.clone()))
        .collect()
}

/// Split members around `threshold`; a non-positive threshold puts everyone above
pub fn split_by_level<'a, I>(members: I, threshold: i32) -> LevelSplit
where
    I: IntoIterator<Item = &'a Member>,
{
    let (above, below) = members
        .into_iter()
        .cloned()
        .partition(|member| member.is_main(threshold));
    LevelSplit { above, below }
}

/// Classify a roster
pub fn classify(
    guild_members: &[Member],
    external_characters: &[Member],
    level_threshold: i32,
) -> RosterAnalysis {
    let merged = merge_roster(guild_members, external_characters);

    let online = merged.iter().filter(|m| m.is_online()).count();
    let counts = RosterCounts {
        online,
        offline: merged.len() - online,
        total: merged.len(),
        external: merged.iter().filter(|m| m.is_external).count(),
    };

    let (exited, active): (Vec<Member>, Vec<Member>) =
        merged.iter().cloned().partition(|m| m.is_exited);

    let mut sorted: Vec<Member> = active.into_iter().filter(Member::is_online).collect();
    sort_by_level_desc(&mut sorted);

    let mut exited_sorted = exited;
    sort_by_level_desc(&mut exited_sorted);

    let vocations = group_by_vocation(&sorted);
    let vocation_tiers = vocations
        .iter()
        .map(|(vocation, members)| (vocation.clone(), split_by_level(members, level_threshold)))
        .collect();

    RosterAnalysis {
        counts,
        level_threshold,
        vocations,
        vocation_tiers,
        exited_vocations: group_by_vocation(&exited_sorted),
        by_level: split_by_level(&sorted, level_threshold),
        exited_by_level: split_by_level(&exited_sorted, level_threshold),
        sorted,
        exited_sorted,
        external_characters: merged.into_iter().filter(|m| m.is_external).collect(),
    }
}

fn sort_by_level_desc(members: &mut [Member]) {
    members.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.name.cmp(&b.name)));
}

/// Group an already sorted list; group order follows the input order
fn group_by_vocation(members: &[Member]) -> BTreeMap<Vocation, Vec<Member>> {
    let mut groups: BTreeMap<Vocation, Vec<Member>> = BTreeMap::new();
    for member in members {
        groups
            .entry(member.canonical_vocation())
            .or_default()
            .push(member.clone());
    }
    groups
}
