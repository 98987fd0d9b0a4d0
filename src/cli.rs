use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use nfl_season_games::constants::season::REGULAR_SEASON_WEEKS;
use nfl_season_games::output::OutputFormat;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the invocation only touches configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_domain.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// NFL season game table
///
/// Fetches the game-center document of every regular season game of a season and
/// prints one row per game: id, date, home and away team, home and away score.
/// Games are numbered into season weeks, and only the first `--weeks` weeks are fetched.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Season year, e.g. 2015 for the season starting in September 2015
    #[arg(short, long, required_unless_present_any = ["new_api_domain", "new_log_file_path", "clear_log_file_path", "list_config"])]
    pub season: Option<i32>,

    /// Include games from weeks 1 through this week
    #[arg(short, long, default_value_t = REGULAR_SEASON_WEEKS)]
    pub weeks: u32,

    /// Print the season week of every game instead of fetching game documents
    #[arg(long = "gameweeks")]
    pub gameweeks: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, help_heading = "Display Options")]
    pub format: OutputFormat,

    /// Show full team names instead of abbreviations (text format only)
    #[arg(long = "team-names", help_heading = "Display Options")]
    pub team_names: bool,

    /// Number of game documents fetched at once (overrides config)
    #[arg(long = "concurrency", help_heading = "Fetching")]
    pub concurrency: Option<usize>,

    /// Update API domain in config
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_DOMAIN")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write logs to stderr
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Custom log file path for this run
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
