use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// A league tracked by the dashboard: Sleeper league id plus the display
/// name used for section headers and power-ranking lookups.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    pub id: String,
    pub name: String,
}

/// One hand-maintained power-ranking entry. Rank position is implied by
/// the order of entries for the same league in the config file.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RankingEntry {
    /// Display name of the league this entry belongs to
    pub league: String,
    /// Team name as written by the league commissioner; matched
    /// case-insensitively against live roster names at render time
    pub team_name: String,
    /// Signed movement since last week's rankings
    #[serde(default)]
    pub change: i32,
    /// Free-text blurb shown next to the entry
    #[serde(default)]
    pub note: String,
}

/// Hand-curated power rankings: a free-text week label plus an ordered
/// entry list. Edited manually in the config file each week.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PowerRankings {
    /// Free-text label shown in the power rankings header (e.g. "Week 5")
    #[serde(default)]
    pub week: String,
    #[serde(default)]
    pub entries: Vec<RankingEntry>,
}

impl PowerRankings {
    /// Returns the ranking entries for a league, preserving file order.
    /// The position within the returned list is the rank.
    pub fn entries_for(&self, league_name: &str) -> Vec<&RankingEntry> {
        self.entries
            .iter()
            .filter(|e| e.league == league_name)
            .collect()
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the Sleeper API. Should include the https:// prefix
    /// and the /v1 version segment.
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Leagues shown on the dashboard, in display order.
    #[serde(default)]
    pub leagues: Vec<LeagueConfig>,
    /// Manually curated power rankings.
    #[serde(default)]
    pub power_rankings: PowerRankings,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    /// Seeds the league list and a placeholder rankings block so a fresh
    /// install renders something editable instead of an empty page.
    fn default() -> Self {
        Config {
            api_domain: constants::DEFAULT_API_DOMAIN.to_string(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            leagues: vec![
                LeagueConfig {
                    id: "1186844188245356544".to_string(),
                    name: "League of Record".to_string(),
                },
                LeagueConfig {
                    id: "1257084943821967360".to_string(),
                    name: "FFL".to_string(),
                },
                LeagueConfig {
                    id: "1186825886808555520".to_string(),
                    name: "Dynasty Champs".to_string(),
                },
            ],
            power_rankings: PowerRankings {
                week: "Set Weekly".to_string(),
                entries: vec![
                    RankingEntry {
                        league: "League of Record".to_string(),
                        team_name: "Team Name 1".to_string(),
                        change: 1,
                        note: "Add your note here.".to_string(),
                    },
                    RankingEntry {
                        league: "League of Record".to_string(),
                        team_name: "Team Name 2".to_string(),
                        change: -1,
                        note: "Add your note here.".to_string(),
                    },
                    RankingEntry {
                        league: "FFL".to_string(),
                        team_name: "Team Name A".to_string(),
                        change: 0,
                        note: "Add your note here.".to_string(),
                    },
                    RankingEntry {
                        league: "Dynasty Champs".to_string(),
                        team_name: "Dynasty Team".to_string(),
                        change: 2,
                        note: "Add your note here.".to_string(),
                    },
                ],
            },
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, writes the default config and uses it.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `SLEEPER_HQ_API_DOMAIN` - Override API domain
    /// - `SLEEPER_HQ_LOG_FILE` - Override log file path
    /// - `SLEEPER_HQ_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else {
            // Sleeper's public API needs no credentials, so first run can
            // seed a default config instead of prompting.
            let config = Config::default();
            config.save().await?;
            info!("Wrote default config to {config_path}");
            config
        };

        config.apply_env_overrides();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of whatever the
    /// config file provided.
    fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_domain, &self.log_file_path, &self.leagues)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Leagues:");
            for league in &config.leagues {
                println!("{} ({})", league.name, league.id);
            }
            println!("────────────────────────────────────");
            println!("Power Rankings Week:");
            println!("{}", config.power_rankings.week);
            println!("{} entries", config.power_rankings.entries.len());
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/sleeper_hq.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the
    /// API domain has the proper https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_domain = if !self.api_domain.starts_with("https://") {
            format!("https://{}", self.api_domain.trim_start_matches("http://"))
        } else {
            self.api_domain.clone()
        };
        let content = toml::to_string_pretty(&Config {
            api_domain,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
            leagues: self.leagues.clone(),
            power_rankings: self.power_rankings.clone(),
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
