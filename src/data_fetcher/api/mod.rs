pub mod urls;
pub mod http_client;
mod fetch_utils;
pub mod game_api;
pub mod game_ids;
pub mod season_api;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use game_api::{fetch_game_record, record_from_document};
pub use game_ids::{FixedGameIds, GameIdSource, ScheduleGameIdSource, extract_game_ids};
pub use season_api::{
    build_week_index, fetch_gameweeks, fetch_season_games, get_gameweeks, season_games,
};
