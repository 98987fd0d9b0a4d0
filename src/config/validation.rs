use crate::constants::MAX_CONCURRENT_FETCHES_LIMIT;
use crate::error::AppError;
use reqwest::Url;
use std::path::Path;

/// Checks that an API domain is an absolute `http://` or `https://` URL with a host.
///
/// Request URLs are built by appending paths to this value, so a domain without a
/// scheme (`www.nfl.com`, `localhost:8080`) is rejected here rather than failing
/// later inside the HTTP client.
///
/// # Arguments
/// * `api_domain` - The configured API domain
///
/// # Returns
/// * `Ok(())` - The domain can be used as a request base
/// * `Err(AppError::Config)` - The domain is empty, relative, uses another scheme or has no host
///
/// # Example
/// ```
/// use nfl_season_games::config::validation::validate_api_domain;
///
/// assert!(validate_api_domain("http://www.nfl.com").is_ok());
/// assert!(validate_api_domain("www.nfl.com").is_err());
/// ```
pub fn validate_api_domain(api_domain: &str) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    let url = Url::parse(api_domain).map_err(|e| {
        AppError::config_error(format!(
            "API domain '{api_domain}' is not an absolute URL ({e}); include http:// or https://"
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::config_error(format!(
            "API domain '{api_domain}' must use http:// or https://, got '{}:'",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::config_error(format!(
            "API domain '{api_domain}' has no host"
        )));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain must be an absolute http(s) URL (see [`validate_api_domain`])
/// - HTTP timeout must be positive
/// - Fetch concurrency must be between 1 and the configured limit
/// - If a log file path is provided it cannot be empty, and its parent directory
///   must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    max_concurrent_fetches: usize,
) -> Result<(), AppError> {
    validate_api_domain(api_domain)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if !(1..=MAX_CONCURRENT_FETCHES_LIMIT).contains(&max_concurrent_fetches) {
        return Err(AppError::config_error(format!(
            "max_concurrent_fetches must be between 1 and {MAX_CONCURRENT_FETCHES_LIMIT}, got {max_concurrent_fetches}"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
