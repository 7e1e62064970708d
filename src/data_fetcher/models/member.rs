use serde::{Deserialize, Serialize};

/// Metadata blob attached to a league member. The `team_name` override is
/// set when the member has renamed their franchise in the Sleeper app.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemberMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// League member as returned by `GET /league/{league_id}/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub metadata: Option<MemberMetadata>,
}

impl Member {
    /// Resolves the name shown for this member's team: the team-name
    /// override wins, then the profile display name, then "Unknown".
    pub fn resolved_name(&self) -> String {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .filter(|name| !name.is_empty())
            .or(self.display_name.as_deref())
            .unwrap_or("Unknown")
            .to_string()
    }
}
