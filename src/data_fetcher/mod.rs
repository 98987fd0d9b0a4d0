pub mod api;
pub mod models;
pub mod teams;
pub mod weeks;

pub use api::{fetch_season_games, get_gameweeks, season_games};
pub use models::{GameId, GameRecord, GameTable};
pub use teams::{TeamDirectory, TeamInfo};
pub use weeks::{SeasonWeekIndex, season_weeks};
