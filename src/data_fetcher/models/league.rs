use serde::{Deserialize, Serialize};

/// Metadata blob attached to a league. Sleeper stores every metadata value
/// as a string, including week numbers.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LeagueMetadata {
    #[serde(default)]
    pub latest_league_scoring_week: Option<String>,
}

/// League object as returned by `GET /league/{league_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league_id: String,
    pub name: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub metadata: Option<LeagueMetadata>,
}

impl League {
    /// Returns the league's own notion of the current scoring week, when
    /// the metadata carries one and it parses as a week number.
    pub fn latest_scoring_week(&self) -> Option<u32> {
        self.metadata
            .as_ref()
            .and_then(|m| m.latest_league_scoring_week.as_deref())
            .and_then(|raw| raw.parse::<u32>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_deserializes_with_minimal_fields() {
        let json = r#"{
            "league_id": "1186844188245356544",
            "name": "League of Record"
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.league_id, "1186844188245356544");
        assert_eq!(league.name, "League of Record");
        assert!(league.metadata.is_none());
        assert_eq!(league.latest_scoring_week(), None);
    }

    #[test]
    fn test_latest_scoring_week_parses_string_metadata() {
        let json = r#"{
            "league_id": "1",
            "name": "FFL",
            "metadata": { "latest_league_scoring_week": "5" }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.latest_scoring_week(), Some(5));
    }

    #[test]
    fn test_latest_scoring_week_ignores_unparseable_metadata() {
        let json = r#"{
            "league_id": "1",
            "name": "FFL",
            "metadata": { "latest_league_scoring_week": "" }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.latest_scoring_week(), None);
    }

    #[test]
    fn test_metadata_tolerates_unknown_keys() {
        let json = r#"{
            "league_id": "1",
            "name": "FFL",
            "metadata": { "auto_continue": "on", "latest_league_scoring_week": "12" }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.latest_scoring_week(), Some(12));
    }
}
