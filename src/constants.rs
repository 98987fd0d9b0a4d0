//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Default API domain serving schedule pages and game-center documents
pub const DEFAULT_API_DOMAIN: &str = "http://www.nfl.com";

/// Default number of game documents fetched at once (1 = strictly sequential)
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

/// Upper bound accepted for `max_concurrent_fetches`
pub const MAX_CONCURRENT_FETCHES_LIMIT: usize = 16;

/// Season calendar constants
pub mod season {
    /// Days subtracted from a game date before taking its ISO week.
    /// Fixed constant; moving it shifts week boundaries.
    pub const WEEK_OFFSET_DAYS: i64 = 87;

    /// Number of regular season weeks
    pub const REGULAR_SEASON_WEEKS: u32 = 17;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for API domain override
    pub const API_DOMAIN: &str = "NFL_API_DOMAIN";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "NFL_LOG_FILE";

    /// Environment variable for HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "NFL_HTTP_TIMEOUT";

    /// Environment variable for fetch concurrency override
    pub const MAX_CONCURRENT_FETCHES: &str = "NFL_MAX_CONCURRENT_FETCHES";
}

/// Logging defaults
pub mod logging {
    /// Log file name used when no custom path is configured
    pub const DEFAULT_LOG_FILE_NAME: &str = "nfl_season_games.log";

    /// Default tracing directive for this crate
    pub const DEFAULT_DIRECTIVE: &str = "nfl_season_games=info";
}
