//! Sleeper Multi-League Fantasy Football Dashboard Library
//!
//! This library provides functionality for fetching Sleeper fantasy
//! football league data and rendering standings, current matchups and
//! hand-curated power rankings in a teletext-style terminal page.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sleeper_hq::config::Config;
//! use sleeper_hq::dashboard_ui::create_dashboard_page;
//! use sleeper_hq::data_fetcher::fetch_dashboard_data;
//! use sleeper_hq::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     // Load leagues and power rankings from the config file
//!     let config = Config::load().await?;
//!
//!     // Fetch and aggregate every configured league
//!     let bundles = fetch_dashboard_data(&config, None).await?;
//!
//!     // Build and render the dashboard page
//!     let page = create_dashboard_page(&config, &bundles, false, true);
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod dashboard_ui;
pub mod data_fetcher;
pub mod error;
pub mod rankings;

// Re-export commonly used types for convenience
pub use config::{Config, LeagueConfig, PowerRankings, RankingEntry};
pub use dashboard_ui::{DashboardPage, DashboardRow, create_dashboard_page, create_error_page};
pub use data_fetcher::api::fetch_dashboard_data;
pub use data_fetcher::models::{League, LeagueBundle, Matchup, Team};
pub use error::AppError;
pub use rankings::{ResolvedRanking, resolve_rankings};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
