//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities and service results
//! to response DTOs.

use std::collections::BTreeMap;

use guild_core::{AlertConfig, LevelSplit, Member, MemberNote, RosterAnalysis, SoundDecision, Vocation};

use super::responses::{
    AlertConfigResponse, AlertStatusResponse, CommandResponse, CountsResponse,
    LevelSplitResponse, MemberResponse, NoteResponse, RefreshResponse, RosterAnalysisResponse,
    RosterResponse, VocationGroupResponse,
};
use crate::services::{AlertStatus, CommandOutcome, CycleOutcome, RosterView};

// ============================================================================
// Roster Mappers
// ============================================================================

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            name: member.name.clone(),
            vocation: member.vocation.clone(),
            canonical_vocation: member.canonical_vocation().to_string(),
            level: member.level,
            status: member.status.to_string(),
            last_seen: member.last_seen,
            is_exited: member.is_exited,
            is_external: member.is_external,
        }
    }
}

fn members(list: &[Member]) -> Vec<MemberResponse> {
    list.iter().map(MemberResponse::from).collect()
}

impl From<&LevelSplit> for LevelSplitResponse {
    fn from(split: &LevelSplit) -> Self {
        Self {
            above: members(&split.above),
            below: members(&split.below),
        }
    }
}

fn vocation_groups(
    groups: &BTreeMap<Vocation, Vec<Member>>,
    tiers: Option<&BTreeMap<Vocation, LevelSplit>>,
) -> Vec<VocationGroupResponse> {
    groups
        .iter()
        .map(|(vocation, list)| VocationGroupResponse {
            vocation: vocation.to_string(),
            members: members(list),
            tiers: tiers
                .and_then(|tiers| tiers.get(vocation))
                .map(LevelSplitResponse::from),
        })
        .collect()
}

impl From<&RosterAnalysis> for RosterAnalysisResponse {
    fn from(analysis: &RosterAnalysis) -> Self {
        Self {
            counts: CountsResponse {
                online: analysis.counts.online,
                offline: analysis.counts.offline,
                total: analysis.counts.total,
                external: analysis.counts.external,
            },
            level_threshold: analysis.level_threshold,
            vocations: vocation_groups(&analysis.vocations, Some(&analysis.vocation_tiers)),
            exited_vocations: vocation_groups(&analysis.exited_vocations, None),
            by_level: LevelSplitResponse::from(&analysis.by_level),
            exited_by_level: LevelSplitResponse::from(&analysis.exited_by_level),
            sorted: members(&analysis.sorted),
            exited_sorted: members(&analysis.exited_sorted),
            external_characters: members(&analysis.external_characters),
        }
    }
}

impl RosterResponse {
    pub fn new(view: &RosterView, refreshing: bool) -> Self {
        Self {
            guild_name: view.snapshot.as_ref().map(|s| s.guild_name.clone()),
            fetched_at: view.fetched_at,
            last_error: view.last_error.clone(),
            stale: view.is_stale(),
            refreshing,
            analysis: view.analysis.as_ref().map(RosterAnalysisResponse::from),
        }
    }
}

impl From<&CycleOutcome> for RefreshResponse {
    fn from(outcome: &CycleOutcome) -> Self {
        let evaluation = outcome.evaluation();
        Self {
            outcome: outcome.as_str().to_string(),
            level: evaluation.map(|e| e.level),
            recent_count: evaluation.map(|e| e.recent_count),
            error: match outcome {
                CycleOutcome::Failed { error, .. } => Some(error.clone()),
                _ => None,
            },
        }
    }
}

impl From<&CommandOutcome> for CommandResponse {
    fn from(outcome: &CommandOutcome) -> Self {
        Self {
            name: outcome.name.to_string(),
            applied_locally: outcome.applied_locally,
            forwarded: outcome.forwarded,
        }
    }
}

// ============================================================================
// Note Mappers
// ============================================================================

impl From<&MemberNote> for NoteResponse {
    fn from(note: &MemberNote) -> Self {
        Self {
            name: note.name.to_string(),
            message: note.message.clone(),
            updated_at: note.updated_at,
        }
    }
}

impl From<MemberNote> for NoteResponse {
    fn from(note: MemberNote) -> Self {
        Self::from(&note)
    }
}

// ============================================================================
// Alert Mappers
// ============================================================================

fn sound_label(sound: SoundDecision) -> &'static str {
    match sound {
        SoundDecision::Play { .. } => "played",
        SoundDecision::SuppressedByCooldown => "suppressed_by_cooldown",
        SoundDecision::Muted => "muted",
        SoundDecision::NotRequired => "not_required",
    }
}

impl From<&AlertStatus> for AlertStatusResponse {
    fn from(status: &AlertStatus) -> Self {
        Self {
            level: status.level,
            recent_count: status.recent_count,
            enabled: status.enabled,
            sound: status.sound.map(|s| sound_label(s).to_string()),
            on_cooldown: status.on_cooldown,
            cooldown_remaining_seconds: status.cooldown_remaining.map(|d| d.num_seconds()),
            last_fired_at: status.last_fired_at,
            evaluated_at: status.evaluated_at,
        }
    }
}

impl From<&AlertConfig> for AlertConfigResponse {
    fn from(config: &AlertConfig) -> Self {
        Self {
            enabled: config.enabled,
            yellow_alert_players: config.yellow_alert_players,
            red_alert_players: config.red_alert_players,
            time_window_minutes: config.time_window_minutes,
            sound_enabled: config.sound_enabled,
            cooldown_minutes: config.cooldown_minutes,
            sound_volume: config.sound_volume,
        }
    }
}
