//! Season table assembly.
//!
//! Enumerate ids, number their weeks over the whole season, keep the first
//! `weeks` weeks and fetch one game-center document per surviving id.

use futures::{StreamExt, TryStreamExt, stream};
use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::config::validation::validate_api_domain;
use crate::data_fetcher::models::{GameRecord, GameTable};
use crate::data_fetcher::weeks::SeasonWeekIndex;
use crate::error::AppError;

use super::game_api::fetch_game_record;
use super::game_ids::{GameIdSource, ScheduleGameIdSource};
use super::http_client::create_http_client_with_timeout;

/// Enumerates a season's ids and numbers their weeks in one batch.
///
/// # Arguments
/// * `source` - Where the season's game ids come from
/// * `season` - Season year, e.g. `2015` for the 2015-16 season
///
/// # Returns
/// * `Ok(SeasonWeekIndex)` - Every id paired with its 1-based season week, in enumeration order
///
/// # Errors
/// * `AppError::NoGameIds` - the source returned no ids for the season
/// * `AppError::GameIdDate` - an id does not start with a valid date
/// * Any error raised by the source while enumerating
#[instrument(skip(source))]
pub async fn build_week_index<S: GameIdSource>(
    source: &S,
    season: i32,
) -> Result<SeasonWeekIndex, AppError> {
    let ids = source.game_ids(season).await?;
    if ids.is_empty() {
        return Err(AppError::no_game_ids(season));
    }

    let index = SeasonWeekIndex::build(&ids)?;
    info!("Indexed {} games for season {season}", index.len());
    Ok(index)
}

/// Season week of every game id, in enumeration order.
///
/// # Arguments
/// * `source` - Where the season's game ids come from
/// * `season` - Season year
///
/// # Returns
/// * `Ok(Vec<u32>)` - One week per id, positionally aligned with the enumeration
/// * `Err(AppError)` - As for [`build_week_index`]
pub async fn get_gameweeks<S: GameIdSource>(source: &S, season: i32) -> Result<Vec<u32>, AppError> {
    Ok(build_week_index(source, season).await?.weeks())
}

/// Builds the game table for the first `weeks` weeks of `season`.
///
/// Rows follow the enumeration order of the ids. Up to
/// `config.max_concurrent_fetches` documents are requested at once and results are
/// reassembled in order. The first failure, in id order, aborts the build and no
/// partial table is returned.
///
/// # Arguments
/// * `client` - HTTP client for the game-center requests
/// * `config` - API domain and fetch concurrency
/// * `source` - Where the season's game ids come from
/// * `season` - Season year
/// * `weeks` - Highest season week to include; `0` gives an empty table
///
/// # Returns
/// * `Ok(GameTable)` - One row per game in weeks `1..=weeks`
/// * `Err(AppError::Config)` - The API domain is not an absolute http(s) URL; nothing is requested
/// * `Err(AppError)` - Lookup, date, fetch or schema errors from enumeration or any game
#[instrument(skip(client, config, source))]
pub async fn season_games<S: GameIdSource>(
    client: &Client,
    config: &Config,
    source: &S,
    season: i32,
    weeks: u32,
) -> Result<GameTable, AppError> {
    validate_api_domain(&config.api_domain)?;

    let index = build_week_index(source, season).await?;
    let selected = index.ids_through(weeks);

    info!(
        "Fetching {} of {} games for season {season} weeks 1-{weeks}",
        selected.len(),
        index.len()
    );

    let records: Vec<GameRecord> = stream::iter(selected.iter())
        .map(|id| fetch_game_record(client, config, id))
        .buffered(config.max_concurrent_fetches.max(1))
        .try_collect()
        .await?;

    info!("Built table with {} rows for season {season}", records.len());
    Ok(GameTable::new(records))
}

/// [`season_games`] with a client and schedule scraper built from `config`.
///
/// # Arguments
/// * `config` - Supplies the API domain, HTTP timeout and fetch concurrency
/// * `season` - Season year
/// * `weeks` - Highest season week to include
///
/// # Returns
/// * `Ok(GameTable)` - The season table
/// * `Err(AppError)` - Client construction failure or any error from [`season_games`]
pub async fn fetch_season_games(
    config: &Config,
    season: i32,
    weeks: u32,
) -> Result<GameTable, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let source = ScheduleGameIdSource::new(client.clone(), config);
    season_games(&client, config, &source, season, weeks).await
}

/// [`get_gameweeks`] with a client and schedule scraper built from `config`.
///
/// # Arguments
/// * `config` - Supplies the API domain and HTTP timeout
/// * `season` - Season year
///
/// # Returns
/// * `Ok(SeasonWeekIndex)` - Ids with their weeks, for display or filtering
/// * `Err(AppError)` - Client construction failure or any error from [`build_week_index`]
pub async fn fetch_gameweeks(config: &Config, season: i32) -> Result<SeasonWeekIndex, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let source = ScheduleGameIdSource::new(client, config);
    build_week_index(&source, season).await
}
