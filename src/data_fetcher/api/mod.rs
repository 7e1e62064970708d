//! Remote data client for the Sleeper API.

mod fetch_utils;
mod http_client;
mod league_api;
mod orchestrator;
mod urls;

pub use http_client::create_http_client_with_timeout;
pub use league_api::{
    fetch_league, fetch_matchups, fetch_members, fetch_rosters, fetch_season_state,
};
pub use orchestrator::{
    fetch_dashboard_data, fetch_dashboard_data_with_client, fetch_league_bundle,
};
pub use urls::{
    build_league_url, build_matchups_url, build_members_url, build_rosters_url, build_state_url,
};
