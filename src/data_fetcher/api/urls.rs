//! URL building utilities for Sleeper API endpoints

/// Builds the URL for fetching a league's metadata.
///
/// # Example
/// ```
/// use sleeper_hq::data_fetcher::api::build_league_url;
///
/// let url = build_league_url("https://api.sleeper.app/v1", "1186844188245356544");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/1186844188245356544");
/// ```
pub fn build_league_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/league/{league_id}")
}

/// Builds the URL for fetching a league's member list.
///
/// # Example
/// ```
/// use sleeper_hq::data_fetcher::api::build_members_url;
///
/// let url = build_members_url("https://api.sleeper.app/v1", "42");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/42/users");
/// ```
pub fn build_members_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/league/{league_id}/users")
}

/// Builds the URL for fetching a league's roster list.
///
/// # Example
/// ```
/// use sleeper_hq::data_fetcher::api::build_rosters_url;
///
/// let url = build_rosters_url("https://api.sleeper.app/v1", "42");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/42/rosters");
/// ```
pub fn build_rosters_url(api_domain: &str, league_id: &str) -> String {
    format!("{api_domain}/league/{league_id}/rosters")
}

/// Builds the URL for fetching the global NFL season state.
///
/// # Example
/// ```
/// use sleeper_hq::data_fetcher::api::build_state_url;
///
/// let url = build_state_url("https://api.sleeper.app/v1");
/// assert_eq!(url, "https://api.sleeper.app/v1/state/nfl");
/// ```
pub fn build_state_url(api_domain: &str) -> String {
    format!("{api_domain}/state/nfl")
}

/// Builds the URL for fetching a league's matchup list for a given week.
///
/// # Example
/// ```
/// use sleeper_hq::data_fetcher::api::build_matchups_url;
///
/// let url = build_matchups_url("https://api.sleeper.app/v1", "42", 5);
/// assert_eq!(url, "https://api.sleeper.app/v1/league/42/matchups/5");
/// ```
pub fn build_matchups_url(api_domain: &str, league_id: &str, week: u32) -> String {
    format!("{api_domain}/league/{league_id}/matchups/{week}")
}
