//! Season week numbering.
//!
//! League weeks run Thursday to Monday, which does not line up with ISO weeks.
//! Every date is shifted back a fixed number of days before its ISO week is
//! taken, and the result is rebased so the earliest week in the batch is 1.
//!
//! The rebasing depends on the whole season, so weeks are always computed over a
//! full batch of dates, never one date at a time.
//!
//! Known limitation: if a shifted date falls in a different ISO year than the rest
//! of the batch, its week number wraps and is returned as chrono reports it.

use crate::constants::season::WEEK_OFFSET_DAYS;
use crate::data_fetcher::models::{GameId, dates_for};
use crate::error::AppError;
use chrono::{Datelike, Duration, NaiveDate};

fn shifted_iso_week(date: NaiveDate) -> u32 {
    (date - Duration::days(WEEK_OFFSET_DAYS)).iso_week().week()
}

/// Maps each date to its 1-based season week, preserving input order.
pub fn season_weeks(dates: &[NaiveDate]) -> Vec<u32> {
    let iso_weeks: Vec<u32> = dates.iter().copied().map(shifted_iso_week).collect();

    let Some(min_week) = iso_weeks.iter().copied().min() else {
        return Vec::new();
    };

    iso_weeks.into_iter().map(|w| w - (min_week - 1)).collect()
}

/// Week number of every game id of a season, in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonWeekIndex {
    entries: Vec<(GameId, u32)>,
}

impl SeasonWeekIndex {
    /// Builds the index over the full season batch.
    pub fn build(ids: &[GameId]) -> Result<Self, AppError> {
        let dates = dates_for(ids)?;
        let weeks = season_weeks(&dates);

        Ok(SeasonWeekIndex {
            entries: ids.iter().cloned().zip(weeks).collect(),
        })
    }

    pub fn entries(&self) -> &[(GameId, u32)] {
        &self.entries
    }

    pub fn weeks(&self) -> Vec<u32> {
        self.entries.iter().map(|(_, week)| *week).collect()
    }

    /// Ids whose week is at most `max_week`, keeping their relative order.
    pub fn ids_through(&self, max_week: u32) -> Vec<GameId> {
        self.entries
            .iter()
            .filter(|(_, week)| *week <= max_week)
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
