use serde::{Deserialize, Serialize};

/// One roster's side of a weekly matchup as returned by
/// `GET /league/{league_id}/matchups/{week}`. Two entries sharing a
/// `matchup_id` face each other; a `null` matchup_id means a bye.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchupEntry {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub points: Option<f64>,
}

impl MatchupEntry {
    /// Points scored this week, treating missing as zero.
    pub fn points_or_zero(&self) -> f64 {
        self.points.unwrap_or(0.0)
    }
}
