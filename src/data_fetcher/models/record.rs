use super::game_id::GameId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One normalised game row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    #[serde(rename = "GameID")]
    pub id: GameId,
    pub date: NaiveDate,
    #[serde(rename = "home")]
    pub home_team: String,
    #[serde(rename = "away")]
    pub away_team: String,
    #[serde(rename = "homescore")]
    pub home_score: i32,
    #[serde(rename = "awayscore")]
    pub away_score: i32,
}

/// Ordered collection of [`GameRecord`]s, in the order the ids were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTable {
    records: Vec<GameRecord>,
}

impl GameTable {
    pub const COLUMNS: [&'static str; 6] =
        ["GameID", "date", "home", "away", "homescore", "awayscore"];

    pub fn new(records: Vec<GameRecord>) -> Self {
        GameTable { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GameRecord> {
        self.records.iter()
    }
}

impl From<Vec<GameRecord>> for GameTable {
    fn from(records: Vec<GameRecord>) -> Self {
        GameTable::new(records)
    }
}

impl IntoIterator for GameTable {
    type Item = GameRecord;
    type IntoIter = std::vec::IntoIter<GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a GameTable {
    type Item = &'a GameRecord;
    type IntoIter = std::slice::Iter<'a, GameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
