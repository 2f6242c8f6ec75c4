//! Configurable GraphQL introspection client.
//!
//! This module provides a flexible client for executing introspection queries
//! with support for custom headers, timeouts, and retry logic, and for turning
//! a [`SchemaSource`] into the text of an introspection document.

use crate::query::check_graphql_errors;
use crate::{IntrospectionError, Result, SchemaSource, INTROSPECTION_QUERY};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

/// Default timeout for introspection requests (30 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default number of retry attempts.
const DEFAULT_RETRIES: u32 = 0;

/// Longest pause between two attempts.
const MAX_BACKOFF_SECS: u64 = 60;

/// A configurable client for executing GraphQL introspection queries.
///
/// The client supports:
/// - Custom HTTP headers (e.g., for authentication)
/// - Configurable request timeout
/// - Automatic retry with exponential backoff
///
/// # Examples
///
/// ```no_run
/// use graphql_introspect::{IntrospectionClient, SchemaSource};
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = IntrospectionClient::new()
///     .with_header("Authorization", "Bearer my-token")
///     .with_timeout(Duration::from_secs(60))
///     .with_retries(3);
/// let source = SchemaSource::parse("https://api.example.com/graphql");
/// let document = client.fetch_document(&source).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct IntrospectionClient {
    headers: HashMap<String, String>,
    timeout: Duration,
    connect_timeout: Duration,
    retries: u32,
}

impl Default for IntrospectionClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IntrospectionClient {
    /// Creates a new introspection client with default settings.
    ///
    /// Default settings:
    /// - 30 second request timeout
    /// - 10 second connection timeout
    /// - No retries
    /// - No custom headers
    #[must_use]
    pub fn new() -> Self {
        Self {
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
        }
    }

    /// Adds a custom HTTP header to be sent with the introspection request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds multiple HTTP headers from an iterator.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Sets the request timeout (connection + transfer). Default is 30 seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout. Default is 10 seconds.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the number of retry attempts on failure.
    ///
    /// Retries use exponential backoff starting at 1 second.
    /// Default is 0 (no retries).
    #[must_use]
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Produces the text of an introspection document for `source`.
    ///
    /// A remote source is introspected and its response body re-serialized;
    /// a file source is returned verbatim without touching the network.
    #[tracing::instrument(skip(self), fields(source = %source))]
    pub async fn fetch_document(&self, source: &SchemaSource) -> Result<String> {
        match source {
            SchemaSource::Remote(url) => {
                let body = self.execute_raw(url).await?;
                serde_json::to_string_pretty(&body)
                    .map_err(|e| IntrospectionError::Parse(e.to_string()))
            }
            SchemaSource::File(path) => read_document(path).await,
        }
    }

    /// Executes introspection and returns the raw JSON response body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The network request fails after all retry attempts
    /// - The server returns an HTTP error status
    /// - The body is not JSON, or carries GraphQL errors and no data
    #[tracing::instrument(skip(self))]
    pub async fn execute_raw(&self, url: &str) -> Result<serde_json::Value> {
        let mut last_error = None;
        let attempts = self.retries.saturating_add(1);

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                tracing::info!(
                    attempt,
                    delay_secs = delay.as_secs(),
                    "Retrying after delay"
                );
                tokio::time::sleep(delay).await;
            }

            match self.execute_raw_once(url).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Request failed");
                    let retryable = Self::is_retryable(&e);
                    last_error = Some(e);

                    // Don't retry on non-retryable errors
                    if !retryable {
                        break;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| IntrospectionError::Network("No attempts made".to_string())))
    }

    /// Executes a single introspection request without retry logic.
    async fn execute_raw_once(&self, url: &str) -> Result<serde_json::Value> {
        tracing::debug!("Creating HTTP client with timeouts");
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()
            .map_err(|e| {
                IntrospectionError::Network(format!("Failed to create HTTP client: {e}"))
            })?;

        let query_body = serde_json::json!({
            "query": INTROSPECTION_QUERY
        });

        tracing::info!("Sending introspection query");
        let mut request = client.post(url).header("content-type", "application/json");

        for (name, value) in &self.headers {
            request = request.header(name, value);
        }

        let response = request
            .json(&query_body)
            .send()
            .await
            .map_err(|e| IntrospectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received response");

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %error_body, "HTTP error response");
            return Err(IntrospectionError::Http(status.as_u16(), error_body));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to parse introspection response");
            IntrospectionError::Parse(e.to_string())
        })?;

        check_graphql_errors(&json)?;

        tracing::info!("Introspection successful");
        Ok(json)
    }

    /// Determines if an error is retryable.
    ///
    /// Network errors and 5xx server errors are retryable.
    /// Parse errors, 4xx client errors, and invalid responses are not.
    fn is_retryable(error: &IntrospectionError) -> bool {
        match error {
            IntrospectionError::Network(_) => true,
            IntrospectionError::Http(status, _) => *status >= 500,
            IntrospectionError::Parse(_)
            | IntrospectionError::Invalid(_)
            | IntrospectionError::Io { .. } => false,
        }
    }
}

/// Pause before retry number `attempt`: 1s, 2s, 4s, ... capped at [`MAX_BACKOFF_SECS`].
fn backoff_delay(attempt: u32) -> Duration {
    let secs = 1u64
        .checked_shl(attempt.saturating_sub(1))
        .unwrap_or(u64::MAX);
    Duration::from_secs(secs.min(MAX_BACKOFF_SECS))
}

async fn read_document(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "Reading introspection document from disk");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| IntrospectionError::Io {
            path: path.to_path_buf(),
            source,
        })
}
