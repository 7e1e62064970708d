//! Manual power-rankings merge.
//!
//! Rankings are hand-written team-name strings in the config file; this
//! module cross-references them against the aggregated team set so matched
//! entries pick up the live team identity. Matching is a case-insensitive
//! exact comparison on the resolved display name — deliberately no fuzzy
//! matching, so a renamed franchise simply degrades to a name-only
//! placeholder until the config catches up. Duplicate display names within
//! a league: the last team wins silently.

use std::collections::HashMap;

use crate::config::{LeagueConfig, PowerRankings};
use crate::data_fetcher::models::{LeagueBundle, Team};

/// A ranking entry resolved against live league data.
#[derive(Debug, Clone)]
pub struct ResolvedRanking {
    /// 1-based rank, implied by entry order in the config
    pub rank: usize,
    /// Signed movement since last week
    pub change: i32,
    /// Commissioner's blurb
    pub note: String,
    /// Name as configured, shown when no team matches
    pub configured_name: String,
    /// The matched live team, when the name lookup succeeded
    pub team: Option<Team>,
}

impl ResolvedRanking {
    /// Name to display: the live team's when matched, else the configured one.
    pub fn display_name(&self) -> &str {
        self.team
            .as_ref()
            .map_or(self.configured_name.as_str(), |team| team.name.as_str())
    }
}

/// Resolves the configured ranking entries of one league against its
/// aggregated teams.
pub fn resolve_rankings(
    league_cfg: &LeagueConfig,
    bundle: &LeagueBundle,
    rankings: &PowerRankings,
) -> Vec<ResolvedRanking> {
    let name_index: HashMap<String, &Team> = bundle
        .teams
        .iter()
        .map(|team| (team.name.to_lowercase(), team))
        .collect();

    rankings
        .entries_for(&league_cfg.name)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let team = name_index
                .get(&entry.team_name.to_lowercase())
                .map(|team| (*team).clone());
            ResolvedRanking {
                rank: index + 1,
                change: entry.change,
                note: entry.note.clone(),
                configured_name: entry.team_name.clone(),
                team,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RankingEntry;
    use crate::data_fetcher::models::{League, RosterSettings};

    fn team(roster_id: u32, name: &str) -> Team {
        Team {
            roster_id,
            owner_id: None,
            co_owners: Vec::new(),
            settings: RosterSettings::default(),
            name: name.to_string(),
            avatar: Some(format!("avatar-{roster_id}")),
        }
    }

    fn bundle(teams: Vec<Team>) -> LeagueBundle {
        LeagueBundle {
            league: League {
                league_id: "1".to_string(),
                name: "League of Record".to_string(),
                season: None,
                status: None,
                total_rosters: None,
                metadata: None,
            },
            standings: teams.clone(),
            teams,
            current_week: 1,
            matchups: Vec::new(),
        }
    }

    fn league_cfg() -> LeagueConfig {
        LeagueConfig {
            id: "1".to_string(),
            name: "League of Record".to_string(),
        }
    }

    fn entry(team_name: &str, change: i32) -> RankingEntry {
        RankingEntry {
            league: "League of Record".to_string(),
            team_name: team_name.to_string(),
            change,
            note: "note".to_string(),
        }
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let bundle = bundle(vec![team(1, "team name 1")]);
        let rankings = PowerRankings {
            week: String::new(),
            entries: vec![entry("Team Name 1", 1)],
        };

        let resolved = resolve_rankings(&league_cfg(), &bundle, &rankings);
        assert_eq!(resolved.len(), 1);
        let team = resolved[0].team.as_ref().unwrap();
        assert_eq!(team.roster_id, 1);
        // Matched entries show the live name, not the configured spelling
        assert_eq!(resolved[0].display_name(), "team name 1");
    }

    #[test]
    fn test_unmatched_entry_degrades_to_placeholder() {
        let bundle = bundle(vec![team(1, "Someone Else")]);
        let rankings = PowerRankings {
            week: String::new(),
            entries: vec![entry("Ghost Team", -2)],
        };

        let resolved = resolve_rankings(&league_cfg(), &bundle, &rankings);
        assert!(resolved[0].team.is_none());
        assert_eq!(resolved[0].display_name(), "Ghost Team");
        assert_eq!(resolved[0].change, -2);
    }

    #[test]
    fn test_rank_follows_entry_order() {
        let bundle = bundle(vec![team(1, "Alpha"), team(2, "Beta")]);
        let rankings = PowerRankings {
            week: String::new(),
            entries: vec![entry("Beta", 0), entry("Alpha", 0)],
        };

        let resolved = resolve_rankings(&league_cfg(), &bundle, &rankings);
        assert_eq!(resolved[0].rank, 1);
        assert_eq!(resolved[0].display_name(), "Beta");
        assert_eq!(resolved[1].rank, 2);
        assert_eq!(resolved[1].display_name(), "Alpha");
    }

    #[test]
    fn test_duplicate_display_names_last_wins() {
        let bundle = bundle(vec![team(1, "Twins"), team(2, "Twins")]);
        let rankings = PowerRankings {
            week: String::new(),
            entries: vec![entry("twins", 0)],
        };

        let resolved = resolve_rankings(&league_cfg(), &bundle, &rankings);
        assert_eq!(resolved[0].team.as_ref().unwrap().roster_id, 2);
    }

    #[test]
    fn test_entries_for_other_leagues_are_ignored() {
        let bundle = bundle(vec![team(1, "Alpha")]);
        let rankings = PowerRankings {
            week: String::new(),
            entries: vec![RankingEntry {
                league: "FFL".to_string(),
                team_name: "Alpha".to_string(),
                change: 0,
                note: String::new(),
            }],
        };

        assert!(resolve_rankings(&league_cfg(), &bundle, &rankings).is_empty());
    }
}
