//! Fetching and aggregating Sleeper league data.
//!
//! `api` talks to the Sleeper REST endpoints; `models` holds the raw serde
//! payloads and the derived aggregates; `processors` joins the two. Every
//! load pass produces a fresh immutable snapshot, there is no cache.

pub mod api;
pub mod models;
pub mod processors;

pub use api::fetch_dashboard_data;
pub use models::{LeagueBundle, Matchup, Team};
