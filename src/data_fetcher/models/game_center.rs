use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-period score values for one team.
///
/// The feed has served both a plain list (`[0, 7, 7, 14]`) and an object keyed by
/// period (`{"1": 0, "2": 7, ..., "T": 14}`); both reduce to the same values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScoreSeries {
    Periods(Vec<i32>),
    Keyed(BTreeMap<String, i32>),
}

impl ScoreSeries {
    /// Final score: the largest value in the series, `None` when it is empty.
    ///
    /// Scores only grow during a game, so the maximum equals the last value while
    /// tolerating duplicated or reordered entries.
    pub fn final_score(&self) -> Option<i32> {
        match self {
            ScoreSeries::Periods(values) => values.iter().copied().max(),
            ScoreSeries::Keyed(map) => map.values().copied().max(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameCenterTeam {
    pub abbr: String,
    pub score: ScoreSeries,
}

/// The game entry inside a game-center document. Fields other than the two
/// teams are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameCenterGame {
    pub home: GameCenterTeam,
    pub away: GameCenterTeam,
}

/// Top level of a game-center document: either an object whose entries are keyed
/// by game id (plus bookkeeping such as `nextupdate`), or a plain list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GameCenterResponse {
    Keyed(BTreeMap<String, Value>),
    Listed(Vec<Value>),
}

impl GameCenterResponse {
    /// Picks the raw entry describing the game.
    ///
    /// For keyed documents the entry under `game_id` wins; otherwise the first
    /// object-valued entry is used, mirroring "first element" access.
    pub fn game_entry(&self, game_id: &str) -> Option<&Value> {
        match self {
            GameCenterResponse::Keyed(map) => map
                .get(game_id)
                .or_else(|| map.values().find(|v| v.is_object())),
            GameCenterResponse::Listed(items) => items.first(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_final_score_is_maximum_not_last() {
        let series = ScoreSeries::Periods(vec![0, 0, 7, 7, 14, 14, 21]);
        assert_eq!(series.final_score(), Some(21));

        let shuffled = ScoreSeries::Periods(vec![21, 7, 14, 0]);
        assert_eq!(shuffled.final_score(), Some(21));
    }

    #[test]
    fn test_final_score_empty_series() {
        assert_eq!(ScoreSeries::Periods(vec![]).final_score(), None);
        assert_eq!(ScoreSeries::Keyed(BTreeMap::new()).final_score(), None);
    }

    #[test]
    fn test_keyed_score_series() {
        let team: GameCenterTeam = serde_json::from_value(json!({
            "abbr": "NE",
            "score": {"1": 7, "2": 14, "3": 21, "4": 28, "5": 0, "T": 28},
            "to": 2
        }))
        .unwrap();

        assert_eq!(team.abbr, "NE");
        assert_eq!(team.score.final_score(), Some(28));
        assert!(matches!(team.score, ScoreSeries::Keyed(ref map) if map.len() == 6));
    }

    #[test]
    fn test_game_entry_prefers_matching_key() {
        let response: GameCenterResponse = serde_json::from_value(json!({
            "2015091000": {"home": {"abbr": "NE", "score": [28]}, "away": {"abbr": "PIT", "score": [21]}},
            "nextupdate": 12
        }))
        .unwrap();

        let entry = response.game_entry("2015091000").unwrap();
        let game: GameCenterGame = serde_json::from_value(entry.clone()).unwrap();
        assert_eq!(game.home.abbr, "NE");
        assert_eq!(game.away.abbr, "PIT");
    }

    #[test]
    fn test_game_entry_falls_back_to_first_object() {
        let response: GameCenterResponse = serde_json::from_value(json!({
            "nextupdate": 12,
            "2015091300": {"home": {"abbr": "CHI", "score": [0, 3]}, "away": {"abbr": "GB", "score": [7, 31]}}
        }))
        .unwrap();

        let entry = response.game_entry("some-other-id").unwrap();
        assert!(entry.get("home").is_some());
    }

    #[test]
    fn test_game_entry_listed_document() {
        let response: GameCenterResponse = serde_json::from_value(json!([
            {"home": {"abbr": "DEN", "score": [19]}, "away": {"abbr": "BAL", "score": [13]}}
        ]))
        .unwrap();

        assert!(response.game_entry("2015091305").is_some());
        let empty: GameCenterResponse = serde_json::from_value(json!([])).unwrap();
        assert!(empty.game_entry("2015091305").is_none());
    }
}
