//! HTTP transport to the analytics backend.
//!
//! Implements the core's [`Transport`] seam over a blocking reqwest client.
//! Auth and headers live here; the state machine never sees them. No
//! client-side timeout is configured beyond reqwest's defaults, and nothing
//! is retried.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use evlog_core::{ApiResponse, Transport, TransportError};

/// Client construction errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provided API key was invalid.
    #[error("invalid API key: {reason}")]
    InvalidApiKey { reason: &'static str },
    /// The provided base URL was invalid.
    #[error("invalid base URL: {reason}")]
    InvalidBaseUrl { reason: &'static str },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// Analytics backend client.
pub struct HttpClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new client for the given backend host.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL or API key is empty, or if the
    /// HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.trim().is_empty() {
            return Err(ApiError::InvalidBaseUrl {
                reason: "base URL cannot be empty",
            });
        }
        if api_key.trim().is_empty() {
            return Err(ApiError::InvalidApiKey {
                reason: "API key cannot be empty",
            });
        }

        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(ApiError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Transport for HttpClient {
    fn post(&self, path: &str, body: &Value) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "posting page request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|err| TransportError(err.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|err| TransportError(err.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
