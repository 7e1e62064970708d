use serde::{Deserialize, Serialize};

/// Global NFL season state as returned by `GET /state/nfl`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonState {
    /// Current scoring week of the season
    pub week: u32,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub season_type: Option<String>,
    #[serde(default)]
    pub display_week: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_deserializes() {
        let json = r#"{
            "week": 5,
            "season": "2025",
            "season_type": "regular",
            "display_week": 5
        }"#;

        let state: SeasonState = serde_json::from_str(json).unwrap();
        assert_eq!(state.week, 5);
        assert_eq!(state.season.as_deref(), Some("2025"));
    }

    #[test]
    fn test_state_tolerates_missing_optional_fields() {
        let json = r#"{ "week": 1 }"#;

        let state: SeasonState = serde_json::from_str(json).unwrap();
        assert_eq!(state.week, 1);
        assert!(state.season_type.is_none());
    }
}
