// Per-game fetching: one game-center document in, one GameRecord out.

use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::config::validation::validate_api_domain;
use crate::data_fetcher::models::{
    GameCenterGame, GameCenterResponse, GameCenterTeam, GameId, GameRecord,
};
use crate::error::AppError;

use super::fetch_utils::fetch_json;
use super::urls::build_game_url;

fn final_score(game_id: &GameId, side: &str, team: &GameCenterTeam) -> Result<i32, AppError> {
    team.score
        .final_score()
        .ok_or_else(|| AppError::empty_score_series(game_id.as_str(), side))
}

/// Turns a parsed game-center document into a record. Either every field is
/// extracted or an error is returned; there are no partial records.
///
/// # Arguments
/// * `game_id` - Id the document was requested for; selects the game entry and gives the date
/// * `document` - The parsed game-center document
/// * `url` - Source URL, carried into error messages
///
/// # Returns
/// * `Ok(GameRecord)` - Teams as abbreviated in the document and final scores as the
///   maximum of each score series
/// * `Err(AppError::ApiNoData)` - The document has no game entry
/// * `Err(AppError::ApiUnexpectedStructure)` - The entry lacks `home`/`away` teams or scores
/// * `Err(AppError::EmptyScoreSeries)` - A team's score series has no values
/// * `Err(AppError::GameIdDate)` - The id does not start with a valid date
pub fn record_from_document(
    game_id: &GameId,
    document: &GameCenterResponse,
    url: &str,
) -> Result<GameRecord, AppError> {
    let entry = document.game_entry(game_id.as_str()).ok_or_else(|| {
        AppError::api_no_data(format!("No game entry for {game_id}"), url)
    })?;

    let game: GameCenterGame = serde_json::from_value(entry.clone())
        .map_err(|e| AppError::api_unexpected_structure(e.to_string(), url))?;

    let home_score = final_score(game_id, "home", &game.home)?;
    let away_score = final_score(game_id, "away", &game.away)?;
    let date = game_id.date()?;

    Ok(GameRecord {
        id: game_id.clone(),
        date,
        home_team: game.home.abbr,
        away_team: game.away.abbr,
        home_score,
        away_score,
    })
}

/// Fetches one game-center document and extracts its record.
///
/// Issues exactly one request to `{api_domain}/liveupdate/game-center/{id}/{id}_gtd.json`.
///
/// # Arguments
/// * `client` - HTTP client used for the request
/// * `config` - Supplies the API domain
/// * `game_id` - The game to fetch
///
/// # Returns
/// * `Ok(GameRecord)` - The extracted record
/// * `Err(AppError::Config)` - The configured API domain is not an absolute http(s) URL
/// * `Err(_)` - A fetch error for transport failures or non-2xx responses, or a schema
///   error as described for [`record_from_document`]
#[instrument(skip(client, config), fields(game_id = %game_id))]
pub async fn fetch_game_record(
    client: &Client,
    config: &Config,
    game_id: &GameId,
) -> Result<GameRecord, AppError> {
    validate_api_domain(&config.api_domain)?;
    let url = build_game_url(&config.api_domain, game_id.as_str());
    let document: GameCenterResponse = fetch_json(client, &url).await?;
    let record = record_from_document(game_id, &document, &url)?;

    debug!(
        "Extracted {} {} - {} {}",
        record.home_team, record.home_score, record.away_score, record.away_team
    );
    info!("Fetched game {game_id}");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::error::ErrorCategory;
    use chrono::NaiveDate;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    const URL: &str = "http://localhost/doc.json";

    fn document(value: serde_json::Value) -> GameCenterResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_from_document() {
        let id = GameId::new("2015091000");
        let doc = document(json!({
            "2015091000": {
                "home": {"abbr": "NE", "score": [0, 14, 7, 7, 28]},
                "away": {"abbr": "PIT", "score": [3, 3, 3, 12, 21]},
                "weather": null
            },
            "nextupdate": 1234
        }));

        let record = record_from_document(&id, &doc, URL).unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2015, 9, 10).unwrap());
        assert_eq!(record.home_team, "NE");
        assert_eq!(record.away_team, "PIT");
        assert_eq!(record.home_score, 28);
        assert_eq!(record.away_score, 21);
    }

    #[test]
    fn test_abbreviations_are_not_transformed() {
        let id = GameId::new("2015091300");
        let doc = document(json!({
            "2015091300": {
                "home": {"abbr": "jac", "score": [9]},
                "away": {"abbr": "Car ", "score": [20]}
            }
        }));

        let record = record_from_document(&id, &doc, URL).unwrap();
        assert_eq!(record.home_team, "jac");
        assert_eq!(record.away_team, "Car ");
    }

    #[test]
    fn test_missing_team_is_schema_error() {
        let id = GameId::new("2015091000");
        let doc = document(json!({"2015091000": {"home": {"abbr": "NE", "score": [28]}}}));

        let err = record_from_document(&id, &doc, URL).unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));
        assert_eq!(err.category(), ErrorCategory::Schema);
    }

    #[test]
    fn test_wrong_score_type_is_schema_error() {
        let id = GameId::new("2015091000");
        let doc = document(json!({
            "2015091000": {
                "home": {"abbr": "NE", "score": "28"},
                "away": {"abbr": "PIT", "score": [21]}
            }
        }));

        assert!(record_from_document(&id, &doc, URL).unwrap_err().is_schema_error());
    }

    #[test]
    fn test_empty_score_series_is_schema_error() {
        let id = GameId::new("2015091000");
        let doc = document(json!({
            "2015091000": {
                "home": {"abbr": "NE", "score": [28]},
                "away": {"abbr": "PIT", "score": []}
            }
        }));

        let err = record_from_document(&id, &doc, URL).unwrap_err();
        assert!(matches!(err, AppError::EmptyScoreSeries { ref side, .. } if side == "away"));
    }

    #[test]
    fn test_document_without_game_entry() {
        let id = GameId::new("2015091000");
        let doc = document(json!({"nextupdate": 1234}));

        let err = record_from_document(&id, &doc, URL).unwrap_err();
        assert!(matches!(err, AppError::ApiNoData { .. }));
    }

    #[test]
    fn test_bad_id_date_fails_after_valid_document() {
        let id = GameId::new("2015133000");
        let doc = document(json!({
            "2015133000": {
                "home": {"abbr": "NE", "score": [28]},
                "away": {"abbr": "PIT", "score": [21]}
            }
        }));

        let err = record_from_document(&id, &doc, URL).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::DateParse);
    }

    #[tokio::test]
    async fn test_fetch_game_record_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/liveupdate/game-center/2015091300/2015091300_gtd.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "2015091300": {
                    "home": {"abbr": "CHI", "score": {"1": 0, "2": 13, "3": 3, "4": 7, "5": 0, "T": 23}},
                    "away": {"abbr": "GB", "score": {"1": 7, "2": 6, "3": 10, "4": 8, "5": 0, "T": 31}}
                },
                "nextupdate": 60
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config {
            api_domain: mock_server.uri(),
            ..Config::default()
        };
        let client = create_test_http_client();

        let record = fetch_game_record(&client, &config, &GameId::new("2015091300"))
            .await
            .unwrap();

        assert_eq!(record.home_team, "CHI");
        assert_eq!(record.away_team, "GB");
        assert_eq!(record.home_score, 23);
        assert_eq!(record.away_score, 31);
    }

    #[tokio::test]
    async fn test_fetch_game_record_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let config = Config {
            api_domain: mock_server.uri(),
            ..Config::default()
        };
        let client = create_test_http_client();

        let err = fetch_game_record(&client, &config, &GameId::new("2015091300"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_game_record_malformed_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;

        let config = Config {
            api_domain: mock_server.uri(),
            ..Config::default()
        };
        let client = create_test_http_client();

        let err = fetch_game_record(&client, &config, &GameId::new("2015091300"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));
    }
}
