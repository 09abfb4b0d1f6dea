//! HTTP fetch layer for the MovieLab API.
//!
//! One async method per server operation, JSON bodies typed against the
//! models module. All methods map failures to [`ApiError`] the same way:
//! 404 becomes `NotFound`, any other 4xx becomes `Validation` carrying the
//! server's message verbatim, everything else becomes `Transport`. Requests
//! are never retried here.

mod movies;
mod persons;
mod reports;

use crate::config::ClientConfig;
use crate::errors::ApiError;

/// Typed asynchronous client for the MovieLab REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to the matching error, consuming the body.
    ///
    /// `what` names the record or operation for the `NotFound` message.
    pub(crate) async fn error_for(resp: reqwest::Response, what: &str) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if status == reqwest::StatusCode::NOT_FOUND {
            ApiError::NotFound(format!("{} not found", what))
        } else if status.is_client_error() {
            if body.is_empty() {
                ApiError::Validation(format!("Request rejected with status {}", status))
            } else {
                ApiError::Validation(body)
            }
        } else {
            ApiError::Transport(format!("Unexpected status {}: {}", status, body))
        }
    }

    /// Liveness probe; returns the server's plain-text response body.
    pub async fn health(&self) -> Result<String, ApiError> {
        let resp = self.http.get(self.url("/health")).send().await?;
        if !resp.status().is_success() {
            return Err(Self::error_for(resp, "Health endpoint").await);
        }
        Ok(resp.text().await?)
    }
}
