//! Shared HTTP client: JSON GETs and streaming downloads with bounded retry
//! on transient failures. Client errors (4xx) are never retried.

use anyhow::{Context, Result};
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::io::Write;

/// Maximum number of attempts for a network operation.
pub const MAX_RETRIES: usize = 3;

/// Delay between attempts in milliseconds.
pub const RETRY_DELAY_MS: u64 = 1000;

/// Errors that will not succeed on retry.
#[derive(Debug)]
pub enum NonRetryableError {
    /// HTTP 401.
    AuthenticationFailed(String),
    /// HTTP 403 or 429.
    RateLimitExceeded(String),
    /// HTTP 404.
    NotFound(String),
    /// Any other 4xx.
    ClientError(String),
}

impl std::fmt::Display for NonRetryableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NonRetryableError::AuthenticationFailed(msg) => {
                write!(f, "Authentication failed: {}. Check your GITHUB_TOKEN.", msg)
            }
            NonRetryableError::RateLimitExceeded(msg) => {
                write!(
                    f,
                    "Rate limit exceeded: {}. Try again later or set GITHUB_TOKEN.",
                    msg
                )
            }
            NonRetryableError::NotFound(msg) => write!(f, "Not found: {}", msg),
            NonRetryableError::ClientError(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for NonRetryableError {}

/// Maps an `error_for_status()` failure to a non-retryable error where the
/// status says a retry cannot help. 5xx and transport errors pass through
/// unchanged and stay retryable.
pub fn check_retryable(error: reqwest::Error) -> anyhow::Error {
    let Some(status) = error.status() else {
        return anyhow::Error::from(error);
    };
    match status {
        StatusCode::UNAUTHORIZED => anyhow::Error::from(NonRetryableError::AuthenticationFailed(
            "invalid or missing authentication token".to_string(),
        )),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => anyhow::Error::from(
            NonRetryableError::RateLimitExceeded("GitHub API refused the request".to_string()),
        ),
        StatusCode::NOT_FOUND => anyhow::Error::from(NonRetryableError::NotFound(
            "the requested resource was not found".to_string(),
        )),
        s if s.is_client_error() => anyhow::Error::from(NonRetryableError::ClientError(format!(
            "HTTP {} error",
            s.as_u16()
        ))),
        _ => anyhow::Error::from(error),
    }
}

fn is_retryable(e: &anyhow::Error) -> bool {
    e.downcast_ref::<NonRetryableError>().is_none()
}

/// HTTP client with built-in retry logic for network operations.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        self.with_retry("GET JSON", || async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .context("Failed to send request")?;

            let response = response.error_for_status().map_err(check_retryable)?;

            response
                .json::<T>()
                .await
                .context("Failed to parse JSON response")
        })
        .await
    }

    /// Downloads a URL into a writer produced by `create_writer`, returning
    /// the number of bytes written. The writer is recreated on each retry so
    /// a partial body is never kept.
    #[tracing::instrument(skip(self, create_writer))]
    pub async fn download_file<W, F>(&self, url: &str, create_writer: F) -> Result<u64>
    where
        W: Write,
        F: Fn() -> Result<W>,
    {
        debug!("Downloading file from {}...", url);

        self.with_retry("Download", || async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .context("Failed to start download request")?;

            let mut response = response.error_for_status().map_err(check_retryable)?;

            let mut writer = create_writer()?;
            let mut downloaded_bytes: u64 = 0;

            while let Some(chunk) = response
                .chunk()
                .await
                .context("Failed to read chunk from download stream")?
            {
                writer
                    .write_all(&chunk)
                    .context("Failed to write chunk to file")?;
                downloaded_bytes += chunk.len() as u64;
            }

            debug!(
                "Downloaded {:.2} MB",
                downloaded_bytes as f64 / (1024.0 * 1024.0)
            );

            Ok(downloaded_bytes)
        })
        .await
    }

    async fn with_retry<F, Fut, T>(&self, operation_name: &str, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T>>,
    {
        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) => {
                    if !is_retryable(&e) {
                        debug!("{}: non-retryable error: {}", operation_name, e);
                        return Err(e);
                    }

                    if attempt < MAX_RETRIES {
                        warn!(
                            "{}: attempt {}/{} failed ({}), retrying in {}ms...",
                            operation_name, attempt, MAX_RETRIES, e, RETRY_DELAY_MS
                        );
                        tokio::time::sleep(std::time::Duration::from_millis(RETRY_DELAY_MS)).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            anyhow::anyhow!("{}: failed after {} attempts", operation_name, MAX_RETRIES)
        }))
    }
}
