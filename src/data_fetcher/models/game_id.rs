use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque per-game token. The first eight characters encode the game date as
/// `YYYYMMDD`; anything after that is a per-day discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        GameId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decomposes the leading `YYYYMMDD` prefix into a calendar date.
    ///
    /// Year is always characters 1-4, month 5-6 and day 7-8, whatever follows.
    pub fn date(&self) -> Result<NaiveDate, AppError> {
        let prefix = self
            .0
            .get(..8)
            .ok_or_else(|| AppError::game_id_date(&self.0, "missing 8 character date prefix"))?;

        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::game_id_date(
                &self.0,
                "date prefix is not numeric",
            ));
        }

        let year = prefix[0..4]
            .parse::<i32>()
            .map_err(|e| AppError::game_id_date(&self.0, e.to_string()))?;
        let month = prefix[4..6]
            .parse::<u32>()
            .map_err(|e| AppError::game_id_date(&self.0, e.to_string()))?;
        let day = prefix[6..8]
            .parse::<u32>()
            .map_err(|e| AppError::game_id_date(&self.0, e.to_string()))?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            AppError::game_id_date(
                &self.0,
                format!("{year:04}-{month:02}-{day:02} is not a calendar date"),
            )
        })
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        GameId::new(id)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        GameId(id)
    }
}

impl AsRef<str> for GameId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derives the date of every id, failing on the first malformed one.
pub fn dates_for(ids: &[GameId]) -> Result<Vec<NaiveDate>, AppError> {
    ids.iter().map(GameId::date).collect()
}
