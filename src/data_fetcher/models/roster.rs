use serde::{Deserialize, Serialize};

/// Season-to-date record and scoring totals for a roster. Points are
/// split by the API into an integer part and a 0-99 decimal part.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(default)]
    pub fpts: u32,
    #[serde(default)]
    pub fpts_decimal: u32,
    #[serde(default)]
    pub fpts_against: u32,
    #[serde(default)]
    pub fpts_against_decimal: u32,
}

impl RosterSettings {
    /// Summed points-for: integer part plus hundredths.
    pub fn points_for(&self) -> f64 {
        f64::from(self.fpts) + f64::from(self.fpts_decimal) / 100.0
    }

    /// Summed points-against: integer part plus hundredths.
    pub fn points_against(&self) -> f64 {
        f64::from(self.fpts_against) + f64::from(self.fpts_against_decimal) / 100.0
    }
}

/// Roster object as returned by `GET /league/{league_id}/rosters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub co_owners: Option<Vec<String>>,
    #[serde(default)]
    pub settings: RosterSettings,
}
