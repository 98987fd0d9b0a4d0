//! Rendering of game tables and week indexes for the command line.

use clap::ValueEnum;
use serde::Serialize;

use crate::data_fetcher::{GameTable, SeasonWeekIndex, TeamDirectory};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for reading in a terminal
    #[default]
    Text,
    /// Comma separated values with a header row
    Csv,
    /// JSON array of row objects
    Json,
}

/// Renders a game table.
///
/// `teams` only affects the text format, where abbreviations are shown as full
/// names. CSV and JSON always carry the abbreviations exactly as fetched.
pub fn render_table(
    table: &GameTable,
    format: OutputFormat,
    teams: Option<&TeamDirectory>,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
        OutputFormat::Csv => {
            let mut out = GameTable::COLUMNS.join(",");
            out.push('\n');
            for r in table {
                out.push_str(&format!(
                    "{},{},{},{},{},{}\n",
                    r.id,
                    r.date,
                    csv_field(&r.home_team),
                    csv_field(&r.away_team),
                    r.home_score,
                    r.away_score
                ));
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let name = |abbr: &str| -> String {
                match teams {
                    Some(directory) => directory.display_name(abbr).to_string(),
                    None => abbr.to_string(),
                }
            };
            let rows: Vec<[String; 6]> = table
                .iter()
                .map(|r| {
                    [
                        r.id.to_string(),
                        r.date.to_string(),
                        name(&r.home_team),
                        name(&r.away_team),
                        r.home_score.to_string(),
                        r.away_score.to_string(),
                    ]
                })
                .collect();
            Ok(aligned(&GameTable::COLUMNS, &rows))
        }
    }
}

#[derive(Serialize)]
struct WeekRow<'a> {
    #[serde(rename = "GameID")]
    game_id: &'a str,
    week: u32,
}

/// Renders the `GameID -> week` mapping.
pub fn render_gameweeks(index: &SeasonWeekIndex, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<WeekRow> = index
                .entries()
                .iter()
                .map(|(id, week)| WeekRow {
                    game_id: id.as_str(),
                    week: *week,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Csv => {
            let mut out = String::from("GameID,week\n");
            for (id, week) in index.entries() {
                out.push_str(&format!("{id},{week}\n"));
            }
            Ok(out)
        }
        OutputFormat::Text => {
            let rows: Vec<[String; 2]> = index
                .entries()
                .iter()
                .map(|(id, week)| [id.to_string(), week.to_string()])
                .collect();
            Ok(aligned(&["GameID", "week"], &rows))
        }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn aligned<const N: usize>(header: &[&str; N], rows: &[[String; N]]) -> String {
    let mut widths: [usize; N] = (*header).map(|h| h.len());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: Vec<&str>| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(header.to_vec());
    for row in rows {
        push_line(row.iter().map(String::as_str).collect());
    }
    out
}
