//! Season game id enumeration.

use std::collections::{HashMap, HashSet};
use std::future::Future;

use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::config::validation::validate_api_domain;
use crate::constants::season::REGULAR_SEASON_WEEKS;
use crate::data_fetcher::models::GameId;
use crate::error::AppError;

use super::fetch_utils::fetch_text;
use super::urls::build_schedule_url;

static GAME_ID_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"data-gameid="(\d{8}\w*)""#).expect("valid game id regex"));

/// Anything able to list the game ids of a season, in schedule order and without
/// duplicates. An empty list is a valid answer; callers decide whether it is an error.
pub trait GameIdSource {
    fn game_ids(&self, season: i32) -> impl Future<Output = Result<Vec<GameId>, AppError>> + Send;
}

/// Pulls `data-gameid` attributes out of a schedule page, in page order.
///
/// # Arguments
/// * `html` - Body of a weekly schedule page
///
/// # Returns
/// * `Vec<GameId>` - Every `data-gameid` value starting with eight digits, duplicates kept
pub fn extract_game_ids(html: &str) -> Vec<GameId> {
    GAME_ID_ATTRIBUTE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| GameId::new(m.as_str()))
        .collect()
}

fn push_unique(ids: &mut Vec<GameId>, seen: &mut HashSet<GameId>, found: Vec<GameId>) {
    for id in found {
        if seen.insert(id.clone()) {
            ids.push(id);
        }
    }
}

/// Enumerates ids by scraping the weekly regular season schedule pages.
#[derive(Debug, Clone)]
pub struct ScheduleGameIdSource {
    client: Client,
    api_domain: String,
    weeks: u32,
}

impl ScheduleGameIdSource {
    /// Creates a scraper for weeks 1 through 17 of the regular season.
    ///
    /// # Arguments
    /// * `client` - HTTP client used for the schedule page requests
    /// * `config` - Supplies the API domain; it is checked when ids are requested
    pub fn new(client: Client, config: &Config) -> Self {
        ScheduleGameIdSource {
            client,
            api_domain: config.api_domain.clone(),
            weeks: REGULAR_SEASON_WEEKS,
        }
    }

    /// Limits how many schedule weeks are scraped.
    pub fn with_weeks(mut self, weeks: u32) -> Self {
        self.weeks = weeks;
        self
    }
}

impl GameIdSource for ScheduleGameIdSource {
    async fn game_ids(&self, season: i32) -> Result<Vec<GameId>, AppError> {
        validate_api_domain(&self.api_domain)?;

        let mut ids = Vec::new();
        let mut seen = HashSet::new();

        for week in 1..=self.weeks {
            let url = build_schedule_url(&self.api_domain, season, week);
            let html = match fetch_text(&self.client, &url).await {
                Ok(html) => html,
                Err(AppError::ApiNotFound { .. }) => {
                    warn!("No schedule page for season {season} week {week}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let found = extract_game_ids(&html);
            debug!("Found {} game ids for season {season} week {week}", found.len());
            push_unique(&mut ids, &mut seen, found);
        }

        info!("Enumerated {} game ids for season {season}", ids.len());
        Ok(ids)
    }
}

/// In-memory id lists keyed by season. Unknown seasons yield an empty list.
#[derive(Debug, Clone, Default)]
pub struct FixedGameIds {
    by_season: HashMap<i32, Vec<GameId>>,
}

impl FixedGameIds {
    pub fn new() -> Self {
        FixedGameIds::default()
    }

    pub fn with_season<I, S>(mut self, season: i32, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<GameId>,
    {
        let mut list = Vec::new();
        let mut seen = HashSet::new();
        push_unique(&mut list, &mut seen, ids.into_iter().map(Into::into).collect());
        self.by_season.insert(season, list);
        self
    }
}

impl GameIdSource for FixedGameIds {
    async fn game_ids(&self, season: i32) -> Result<Vec<GameId>, AppError> {
        Ok(self.by_season.get(&season).cloned().unwrap_or_default())
    }
}
