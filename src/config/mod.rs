use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// API domain serving schedule pages and game-center documents.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// How many game documents may be in flight at once. 1 keeps fetching sequential.
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

fn default_api_domain() -> String {
    constants::DEFAULT_API_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_concurrent_fetches() -> usize {
    constants::DEFAULT_MAX_CONCURRENT_FETCHES
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_domain: default_api_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, falling back to
    /// defaults when no file exists. Environment variables override file values, and
    /// an API domain given without a scheme gets an `https://` prefix.
    ///
    /// # Environment Variables
    /// - `NFL_API_DOMAIN` - Override API domain
    /// - `NFL_LOG_FILE` - Override log file path
    /// - `NFL_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `NFL_MAX_CONCURRENT_FETCHES` - Override fetch concurrency
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.with_env_overrides()
    }

    /// Applies environment overrides, normalises the API domain and validates.
    fn with_env_overrides(mut self) -> Result<Self, AppError> {
        self.apply_env_overrides();
        self.normalize_api_domain();
        self.validate()?;
        Ok(self)
    }

    /// Replaces fields with values from the environment when present.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            self.api_domain = api_domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(concurrency) = std::env::var(env_vars::MAX_CONCURRENT_FETCHES)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.max_concurrent_fetches = concurrency;
        }
    }

    /// Prefixes a scheme-less API domain with `https://` and drops trailing slashes.
    /// A domain that already names a scheme keeps it, so validation can reject
    /// anything other than `http://` or `https://`.
    pub fn normalize_api_domain(&mut self) {
        self.api_domain = normalize_domain(&self.api_domain);
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_domain,
            &self.log_file_path,
            self.http_timeout_seconds,
            self.max_concurrent_fetches,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path} (not created, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Domain:");
        println!("{}", config.api_domain);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Concurrent Fetches:");
        println!("{}", config.max_concurrent_fetches);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::logging::DEFAULT_LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed. A domain given without a scheme is
    /// stored with an `https://` prefix; explicit `http://` domains are kept as is.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.as_os_str().is_empty() && !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_domain: normalize_domain(&self.api_domain),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim().trim_end_matches('/');
    if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_domain, "http://www.nfl.com");
        assert_eq!(config.http_timeout_seconds, 30);
        assert_eq!(config.max_concurrent_fetches, 1);
        assert!(config.log_file_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn test_config_load_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = 5\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_domain, "http://www.nfl.com");
        assert_eq!(config.http_timeout_seconds, 5);
        assert_eq!(config.max_concurrent_fetches, 1);
    }

    #[tokio::test]
    async fn test_config_save_without_scheme_prefix() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            api_domain: "feeds.example.com/".to_string(),
            ..Config::default()
        };

        config.save_to_path(&config_path_str).await.unwrap();

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "https://feeds.example.com");
    }

    #[tokio::test]
    async fn test_config_save_keeps_http_scheme() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        Config::default().save_to_path(&config_path_str).await.unwrap();

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_domain, "http://www.nfl.com");
    }

    #[tokio::test]
    async fn test_config_save_creates_directory_and_roundtrips() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("nfl_season_games");
        let config_path = config_dir.join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            api_domain: "https://api.example.com".to_string(),
            log_file_path: Some("/custom/log/path.log".to_string()),
            http_timeout_seconds: 12,
            max_concurrent_fetches: 4,
        };

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_dir.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded, original);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_domain = [unclosed")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "http://localhost:9000");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "7");
            std::env::set_var(env_vars::MAX_CONCURRENT_FETCHES, "not-a-number");
        }

        let mut config = Config::default();
        config.apply_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::MAX_CONCURRENT_FETCHES);
        }

        assert_eq!(config.api_domain, "http://localhost:9000");
        assert_eq!(config.http_timeout_seconds, 7);
        assert_eq!(config.max_concurrent_fetches, 1);
    }

    #[test]
    #[serial]
    fn test_env_domain_without_scheme_is_normalized() {
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "localhost:8080/");
        }

        let result = Config::default().with_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
        }

        let config = result.unwrap();
        assert_eq!(config.api_domain, "https://localhost:8080");
    }

    #[test]
    #[serial]
    fn test_env_domain_with_other_scheme_is_config_error() {
        unsafe {
            std::env::set_var(env_vars::API_DOMAIN, "ftp://www.nfl.com");
        }

        let result = Config::default().with_env_overrides();

        unsafe {
            std::env::remove_var(env_vars::API_DOMAIN);
        }

        let err = result.unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Config);
    }

    #[test]
    fn test_normalize_api_domain() {
        let mut config = Config {
            api_domain: " www.nfl.com/ ".to_string(),
            ..Config::default()
        };
        config.normalize_api_domain();
        assert_eq!(config.api_domain, "https://www.nfl.com");

        config.api_domain = "http://127.0.0.1:8080/".to_string();
        config.normalize_api_domain();
        assert_eq!(config.api_domain, "http://127.0.0.1:8080");
    }
}
