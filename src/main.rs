// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    apply_arg_overrides, handle_config_update_command, handle_gameweeks_command,
    handle_list_config_command, handle_season_command,
};
use logging::setup_logging;
use nfl_season_games::config::Config;
use nfl_season_games::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    let mut config = Config::load().await?;
    apply_arg_overrides(&args, &mut config)?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let Some(season) = args.season else {
        return Err(AppError::config_error("--season is required"));
    };

    if args.gameweeks {
        handle_gameweeks_command(&args, &config, season).await
    } else {
        handle_season_command(&args, &config, season).await
    }
}
