//! NFL season game table library
//!
//! Fetches per-game game-center documents for a season and normalises them into a
//! table of `{GameID, date, home, away, homescore, awayscore}` rows, with every game
//! assigned a 1-based season week.
//!
//! # Examples
//!
//! ```rust,no_run
//! use nfl_season_games::{Config, AppError, fetch_season_games};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!
//!     // Regular season weeks 1-4 of 2015
//!     let table = fetch_season_games(&config, 2015, 4).await?;
//!     for game in &table {
//!         println!("{} {} {}-{} {}", game.date, game.home_team, game.home_score, game.away_score, game.away_team);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod output;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    FixedGameIds, GameIdSource, ScheduleGameIdSource, fetch_gameweeks, fetch_season_games,
    get_gameweeks, season_games,
};
pub use data_fetcher::{
    GameId, GameRecord, GameTable, SeasonWeekIndex, TeamDirectory, TeamInfo, season_weeks,
};
pub use error::{AppError, ErrorCategory};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
