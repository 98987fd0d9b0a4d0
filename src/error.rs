use thiserror::Error;

/// Broad classification of an [`AppError`], so callers can tell malformed
/// upstream data apart from transport failures without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Fetch,
    Schema,
    DateParse,
    Config,
    Io,
}

#[derive(Debug, Error)]
pub enum AppError {
    // Lookup errors
    #[error("No game identifiers found for season {season}")]
    NoGameIds { season: i32 },

    // Transport errors
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Document structure errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("Score series for {side} team of game {game_id} is empty")]
    EmptyScoreSeries { game_id: String, side: String },

    // Identifier errors
    #[error("Game id '{game_id}' does not start with a valid YYYYMMDD date: {message}")]
    GameIdDate { game_id: String, message: String },

    // Local errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a lookup error for a season without any game identifiers
    pub fn no_game_ids(season: i32) -> Self {
        Self::NoGameIds { season }
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API client error (4xx status codes except 404)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an empty score series error
    pub fn empty_score_series(game_id: impl Into<String>, side: impl Into<String>) -> Self {
        Self::EmptyScoreSeries {
            game_id: game_id.into(),
            side: side.into(),
        }
    }

    /// Create a game id date decomposition error
    pub fn game_id_date(game_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::GameIdDate {
            game_id: game_id.into(),
            message: message.into(),
        }
    }

    /// Classify the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::NoGameIds { .. } => ErrorCategory::Lookup,
            AppError::ApiFetch(_)
            | AppError::ApiNotFound { .. }
            | AppError::ApiClientError { .. }
            | AppError::ApiServerError { .. }
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. } => ErrorCategory::Fetch,
            AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. }
            | AppError::EmptyScoreSeries { .. } => ErrorCategory::Schema,
            AppError::GameIdDate { .. } => ErrorCategory::DateParse,
            AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::Config(_)
            | AppError::LogSetup(_) => ErrorCategory::Config,
            AppError::Io(_) | AppError::JsonSerialize(_) => ErrorCategory::Io,
        }
    }

    /// True for network failures and non-2xx responses
    pub fn is_fetch_error(&self) -> bool {
        self.category() == ErrorCategory::Fetch
    }

    /// True when a document arrived but did not have the expected shape
    pub fn is_schema_error(&self) -> bool {
        self.category() == ErrorCategory::Schema
    }
}
