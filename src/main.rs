// src/main.rs
mod cli;
mod commands;
mod config;
mod constants;
mod dashboard_ui;
mod data_fetcher;
mod error;
mod logging;
mod rankings;
mod version;

use clap::Parser;
use cli::Args;
use commands::{
    handle_config_update_commands, handle_dashboard_command, handle_list_config_command,
    handle_version_command,
};
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle version flag first
    if args.version {
        return handle_version_command().await;
    }

    // Handle configuration operations without touching the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    if handle_config_update_commands(&args).await? {
        return Ok(());
    }

    // Set up logging to file (and stdout in debug mode). The guard must
    // stay alive until exit so buffered log lines get flushed.
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    handle_dashboard_command(&args).await
}
