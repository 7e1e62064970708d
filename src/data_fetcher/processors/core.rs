//! Member/roster aggregation and week resolution.
//!
//! All functions here are pure over their inputs so the join logic and the
//! resolve-week stage of the pipeline can be tested without any I/O.

use std::collections::HashMap;

use crate::constants::FALLBACK_WEEK;
use crate::data_fetcher::models::{League, Member, Roster, SeasonState, Team};

/// Owner identity resolved from a league member.
#[derive(Debug, Clone)]
pub struct OwnerInfo {
    pub display_name: String,
    pub avatar: Option<String>,
}

/// Builds the member-id → identity lookup used to resolve roster owners.
/// Name preference order: team-name override, profile display name,
/// literal "Unknown".
pub fn build_member_index(members: &[Member]) -> HashMap<String, OwnerInfo> {
    members
        .iter()
        .map(|member| {
            (
                member.user_id.clone(),
                OwnerInfo {
                    display_name: member.resolved_name(),
                    avatar: member.avatar.clone(),
                },
            )
        })
        .collect()
}

/// Joins rosters with the member index into display Teams, in roster order.
/// Rosters whose owner is missing from the index fall back to the synthetic
/// `Roster {roster_id}` name with no avatar.
pub fn build_teams(rosters: &[Roster], members: &[Member]) -> Vec<Team> {
    let index = build_member_index(members);

    rosters
        .iter()
        .map(|roster| {
            let owner = roster.owner_id.as_ref().and_then(|id| index.get(id));
            let co_owners = roster
                .co_owners
                .as_deref()
                .unwrap_or_default()
                .iter()
                .filter_map(|id| index.get(id).map(|info| info.display_name.clone()))
                .collect();

            Team {
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                co_owners,
                settings: roster.settings.clone(),
                name: owner.map_or_else(
                    || format!("Roster {}", roster.roster_id),
                    |info| info.display_name.clone(),
                ),
                avatar: owner.and_then(|info| info.avatar.clone()),
            }
        })
        .collect()
}

/// Resolve-week stage of the two-phase fetch pipeline.
///
/// Precedence: explicit override (CLI), the league's own
/// `latest_league_scoring_week` metadata, then the global season state.
pub fn resolve_current_week(
    league: &League,
    state: &SeasonState,
    week_override: Option<u32>,
) -> u32 {
    week_override
        .or_else(|| league.latest_scoring_week())
        .unwrap_or(if state.week > 0 {
            state.week
        } else {
            FALLBACK_WEEK
        })
}
