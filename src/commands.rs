use crate::cli::Args;
use crate::config::Config;
use crate::dashboard_ui::{create_dashboard_page, create_error_page};
use crate::data_fetcher::api::fetch_dashboard_data;
use crate::error::AppError;
use crate::version;
use crossterm::{execute, style::Color, terminal::SetTitle};
use std::io::stdout;
use tracing::error;

const TERMINAL_TITLE: &str = "FANTASY HQ";

/// Handles the --version command.
///
/// Displays version information, logo, and checks for updates.
pub async fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();

    // Check for updates and show version info
    if let Some(latest_version) = version::check_latest_version().await {
        let current =
            semver::Version::parse(env!("CARGO_PKG_VERSION")).map_err(AppError::VersionParse)?;
        let latest = semver::Version::parse(&latest_version).map_err(AppError::VersionParse)?;

        if latest > current {
            version::print_version_info(&latest_version);
        } else {
            println!();
            version::print_version_status_box(vec![
                ("Sleeper HQ Status".to_string(), None),
                ("".to_string(), None),
                (
                    format!("Version: {}", env!("CARGO_PKG_VERSION")),
                    Some(Color::AnsiValue(231)),
                ),
                ("You're running the latest version!".to_string(), None),
            ]);
        }
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display().await?;
    Ok(())
}

/// Handles configuration update flags (--config, --set-log-file,
/// --clear-log-file). Returns true when a config operation ran and the
/// process should exit.
pub async fn handle_config_update_commands(args: &Args) -> Result<bool, AppError> {
    if args.new_api_domain.is_none() && args.new_log_file_path.is_none() && !args.clear_log_file_path
    {
        return Ok(false);
    }

    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(true)
}

/// Narrows the configured league list to the one matching the --league
/// filter (by id or case-insensitive display name).
fn apply_league_filter(config: &mut Config, filter: &str) -> Result<(), AppError> {
    let needle = filter.to_lowercase();
    config
        .leagues
        .retain(|league| league.id == filter || league.name.to_lowercase() == needle);
    if config.leagues.is_empty() {
        return Err(AppError::config_error(format!(
            "No configured league matches '{filter}'"
        )));
    }
    Ok(())
}

/// Fetches all configured leagues and renders the dashboard page.
///
/// Any failed request anywhere in the fan-out collapses to the single
/// static error page; the classified cause is logged only.
pub async fn handle_dashboard_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await?;
    if let Some(filter) = &args.league {
        apply_league_filter(&mut config, filter)?;
    }

    // Check for a new version in the background while we fetch
    let version_check = tokio::spawn(version::check_latest_version());

    let page = match fetch_dashboard_data(&config, args.week).await {
        Ok(bundles) => create_dashboard_page(&config, &bundles, args.disable_links, true),
        Err(e) => {
            error!("Dashboard load failed: {e}");
            create_error_page(args.disable_links)
        }
    };

    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    page.render_buffered(&mut stdout())?;
    println!();

    // Show version info after display if update is available
    if let Ok(Some(latest_version)) = version_check.await {
        version::print_version_info(&latest_version);
    }

    Ok(())
}
