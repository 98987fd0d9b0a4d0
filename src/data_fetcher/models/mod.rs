pub mod game_center;
pub mod game_id;
pub mod record;

pub use game_center::{GameCenterGame, GameCenterResponse, GameCenterTeam, ScoreSeries};
pub use game_id::{GameId, dates_for};
pub use record::{GameRecord, GameTable};
