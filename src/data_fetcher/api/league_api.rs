//! Typed wrappers around the Sleeper league endpoints

use reqwest::Client;
use tracing::{error, instrument};

use super::fetch_utils::fetch;
use super::urls::{
    build_league_url, build_matchups_url, build_members_url, build_rosters_url, build_state_url,
};
use crate::config::Config;
use crate::data_fetcher::models::{League, MatchupEntry, Member, Roster, SeasonState};
use crate::error::AppError;

/// Fetches a league's metadata. A 404 (or the API's null-body answer for
/// unknown ids) is translated into a league-specific error.
#[instrument(skip(client, config))]
pub async fn fetch_league(
    client: &Client,
    config: &Config,
    league_id: &str,
) -> Result<League, AppError> {
    let url = build_league_url(&config.api_domain, league_id);
    match fetch::<League>(client, &url).await {
        Ok(league) => Ok(league),
        Err(e) => {
            error!("Failed to fetch league {}: {}", league_id, e);
            match &e {
                AppError::ApiNotFound { .. } | AppError::ApiNoData { .. } => {
                    Err(AppError::api_league_not_found(league_id))
                }
                _ => Err(e),
            }
        }
    }
}

/// Fetches the member list of a league.
#[instrument(skip(client, config))]
pub async fn fetch_members(
    client: &Client,
    config: &Config,
    league_id: &str,
) -> Result<Vec<Member>, AppError> {
    let url = build_members_url(&config.api_domain, league_id);
    fetch(client, &url).await
}

/// Fetches the roster list of a league.
#[instrument(skip(client, config))]
pub async fn fetch_rosters(
    client: &Client,
    config: &Config,
    league_id: &str,
) -> Result<Vec<Roster>, AppError> {
    let url = build_rosters_url(&config.api_domain, league_id);
    fetch(client, &url).await
}

/// Fetches the global NFL season state.
#[instrument(skip(client, config))]
pub async fn fetch_season_state(client: &Client, config: &Config) -> Result<SeasonState, AppError> {
    let url = build_state_url(&config.api_domain);
    fetch(client, &url).await
}

/// Fetches the raw matchup entries of a league for a given week.
#[instrument(skip(client, config))]
pub async fn fetch_matchups(
    client: &Client,
    config: &Config,
    league_id: &str,
    week: u32,
) -> Result<Vec<MatchupEntry>, AppError> {
    let url = build_matchups_url(&config.api_domain, league_id, week);
    fetch(client, &url).await
}
