use crate::cli::Args;
use nfl_season_games::config::Config;
use nfl_season_games::data_fetcher::TeamDirectory;
use nfl_season_games::data_fetcher::api::{fetch_gameweeks, fetch_season_games};
use nfl_season_games::error::AppError;
use nfl_season_games::output::{render_gameweeks, render_table};
use tracing::info;

/// Applies command line overrides on top of the loaded config.
pub fn apply_arg_overrides(args: &Args, config: &mut Config) -> Result<(), AppError> {
    if let Some(concurrency) = args.concurrency {
        config.max_concurrent_fetches = concurrency;
        config.validate()?;
    }
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
        config.normalize_api_domain();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

/// Fetches and prints the game table for one season.
pub async fn handle_season_command(
    args: &Args,
    config: &Config,
    season: i32,
) -> Result<(), AppError> {
    let table = fetch_season_games(config, season, args.weeks).await?;
    info!("Printing {} games for season {season}", table.len());

    let teams = TeamDirectory::nfl();
    let directory = args.team_names.then_some(&teams);
    print!("{}", render_table(&table, args.format, directory)?);
    Ok(())
}

/// Prints the season week of every game of a season.
pub async fn handle_gameweeks_command(
    args: &Args,
    config: &Config,
    season: i32,
) -> Result<(), AppError> {
    let index = fetch_gameweeks(config, season).await?;
    print!("{}", render_gameweeks(&index, args.format)?);
    Ok(())
}
