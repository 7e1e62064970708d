//! Pairing of raw matchup entries into renderable home/away matchups

use std::collections::HashMap;

use tracing::debug;

use crate::data_fetcher::models::{Matchup, MatchupEntry, Team};

/// Groups raw matchup entries by pairing id and joins them with teams.
///
/// Home/away is decided by the order the entries appeared in the API
/// response; there is no deeper semantic. Only groups of exactly two
/// entries become matchups: one-entry groups and over-full groups are
/// dropped, as are entries with no pairing id (byes) and pairs whose
/// roster ids match no known team.
pub fn pair_matchups(entries: &[MatchupEntry], teams: &[Team]) -> Vec<Matchup> {
    let team_index: HashMap<u32, &Team> = teams.iter().map(|t| (t.roster_id, t)).collect();

    // Group in encounter order so the first entry of each pair stays home
    let mut order: Vec<u32> = Vec::new();
    let mut groups: HashMap<u32, Vec<&MatchupEntry>> = HashMap::new();
    for entry in entries {
        let Some(matchup_id) = entry.matchup_id else {
            debug!("Skipping bye-week entry for roster {}", entry.roster_id);
            continue;
        };
        let group = groups.entry(matchup_id).or_default();
        if group.is_empty() {
            order.push(matchup_id);
        }
        group.push(entry);
    }

    order
        .into_iter()
        .filter_map(|matchup_id| {
            let group = &groups[&matchup_id];
            if group.len() != 2 {
                debug!(
                    "Dropping matchup group {} with {} entries",
                    matchup_id,
                    group.len()
                );
                return None;
            }

            let (first, second) = (group[0], group[1]);
            let home = team_index.get(&first.roster_id)?;
            let away = team_index.get(&second.roster_id)?;

            let points = group
                .iter()
                .map(|entry| (entry.roster_id, entry.points_or_zero()))
                .collect();

            Some(Matchup {
                home: (*home).clone(),
                away: (*away).clone(),
                points,
            })
        })
        .collect()
}
