//! HTTP fetching utilities with status and parse error classification.
//!
//! Every call issues exactly one request. Nothing is cached and nothing is retried.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches `url` and returns the body of a 2xx response as text.
///
/// Transport failures and non-2xx statuses are mapped onto the fetch error variants
/// of [`AppError`].
#[instrument(skip(client))]
pub(super) async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", text.len());
    Ok(text)
}

/// Fetches `url` and deserializes the JSON body into `T`.
#[instrument(skip(client))]
pub(super) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, AppError> {
    let text = fetch_text(client, url).await?;
    parse_json(&text, url)
}

/// Parses a response body, separating empty bodies, non-JSON bodies and JSON of the
/// wrong shape into distinct schema errors.
pub(super) fn parse_json<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        debug!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );

        let trimmed = text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if e.is_syntax() || e.is_eof() || !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
            AppError::api_malformed_json(e.to_string(), url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
