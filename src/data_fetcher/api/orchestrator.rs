//! Load orchestration: the per-league fan-out and the cross-league join.
//!
//! Per league, the four independent requests (league, members, rosters,
//! season state) run concurrently; the matchup request runs after them
//! because it needs the resolved week. All configured leagues load
//! concurrently with each other. Any failure anywhere rejects the whole
//! load pass; there is no per-league isolation or partial rendering.

use futures::future::try_join_all;
use reqwest::Client;
use tracing::{info, instrument};

use super::http_client::create_http_client_with_timeout;
use super::league_api::{
    fetch_league, fetch_matchups, fetch_members, fetch_rosters, fetch_season_state,
};
use crate::config::{Config, LeagueConfig};
use crate::data_fetcher::models::LeagueBundle;
use crate::data_fetcher::processors::{
    build_teams, pair_matchups, resolve_current_week, sort_standings,
};
use crate::error::AppError;

/// Fetches and aggregates one league into a renderable snapshot.
///
/// Phase one resolves the effective scoring week from the concurrently
/// fetched league metadata and season state; phase two fetches that
/// week's matchups.
#[instrument(skip(client, config), fields(league_id = %league_cfg.id))]
pub async fn fetch_league_bundle(
    client: &Client,
    config: &Config,
    league_cfg: &LeagueConfig,
    week_override: Option<u32>,
) -> Result<LeagueBundle, AppError> {
    let (league, members, rosters, state) = tokio::try_join!(
        fetch_league(client, config, &league_cfg.id),
        fetch_members(client, config, &league_cfg.id),
        fetch_rosters(client, config, &league_cfg.id),
        fetch_season_state(client, config),
    )?;

    let teams = build_teams(&rosters, &members);
    let standings = sort_standings(&teams);

    let current_week = resolve_current_week(&league, &state, week_override);
    let raw_matchups = fetch_matchups(client, config, &league_cfg.id, current_week).await?;
    let matchups = pair_matchups(&raw_matchups, &teams);

    info!(
        "Aggregated league {}: {} teams, {} matchups for week {}",
        league_cfg.id,
        teams.len(),
        matchups.len(),
        current_week
    );

    Ok(LeagueBundle {
        league,
        teams,
        standings,
        current_week,
        matchups,
    })
}

/// Fetches every configured league concurrently. Fail-fast: the first
/// error aborts the load and surfaces as the page-wide error state.
pub async fn fetch_dashboard_data(
    config: &Config,
    week_override: Option<u32>,
) -> Result<Vec<LeagueBundle>, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    fetch_dashboard_data_with_client(&client, config, week_override).await
}

/// Variant taking an existing client, used by tests and callers that
/// manage their own pool.
pub async fn fetch_dashboard_data_with_client(
    client: &Client,
    config: &Config,
    week_override: Option<u32>,
) -> Result<Vec<LeagueBundle>, AppError> {
    try_join_all(
        config
            .leagues
            .iter()
            .map(|league_cfg| fetch_league_bundle(client, config, league_cfg, week_override)),
    )
    .await
}
