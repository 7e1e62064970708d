//! Derived types produced by the aggregation step. These are what the
//! dashboard renders; raw API payloads never reach the UI.

use super::league::League;
use super::roster::RosterSettings;
use std::collections::HashMap;

/// A roster joined with its owning member. `name` and `avatar` come from
/// the owner lookup; rosters with no matching member get the synthetic
/// `Roster {roster_id}` name and no avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub roster_id: u32,
    pub owner_id: Option<String>,
    /// Resolved display names of co-owners found in the member index
    pub co_owners: Vec<String>,
    pub settings: RosterSettings,
    pub name: String,
    pub avatar: Option<String>,
}

/// A paired weekly matchup. Home/away is decided purely by the order the
/// two entries appeared in the API response.
#[derive(Debug, Clone)]
pub struct Matchup {
    pub home: Team,
    pub away: Team,
    /// Points scored this week, keyed by roster id. Contains exactly the
    /// two paired rosters.
    pub points: HashMap<u32, f64>,
}

impl Matchup {
    /// Week points for one side of the pairing, zero when absent.
    pub fn points_for(&self, roster_id: u32) -> f64 {
        self.points.get(&roster_id).copied().unwrap_or(0.0)
    }
}

/// Everything the dashboard needs for one league: an immutable snapshot
/// assembled from one load pass.
#[derive(Debug, Clone)]
pub struct LeagueBundle {
    pub league: League,
    /// Teams in roster order, used for name lookups
    pub teams: Vec<Team>,
    /// Teams in standings order (wins desc, then points-for desc)
    pub standings: Vec<Team>,
    pub current_week: u32,
    pub matchups: Vec<Matchup>,
}
