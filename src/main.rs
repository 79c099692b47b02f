// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    failure_hint, handle_config_update_command, handle_list_config_command, handle_view_command,
};
use olympic_medals::config::Config;
use olympic_medals::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args, config).await;
    }

    let result = handle_view_command(&args, &config).await;
    if let Err(e) = &result {
        tracing::error!("{e}");
        if let Some(hint) = failure_hint(e) {
            eprintln!("{hint}");
        }
    }
    result
}
