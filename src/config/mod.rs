//! Configuration module for the MovieLab client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the MovieLab API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout for fetch operations
    pub request_timeout: Duration,
    /// Initial delay before re-subscribing a broken event stream
    pub events_retry: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let base_url = env::var("MOVIELAB_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080/movielab".to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = env::var("MOVIELAB_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .expect("Invalid MOVIELAB_TIMEOUT_SECS format");

        let retry_ms: u64 = env::var("MOVIELAB_EVENTS_RETRY_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .expect("Invalid MOVIELAB_EVENTS_RETRY_MS format");

        Self {
            base_url,
            request_timeout: Duration::from_secs(timeout_secs),
            events_retry: Duration::from_millis(retry_ms),
        }
    }

    /// Build a configuration pointing at an explicit base URL, keeping the
    /// default timeouts. Mostly useful in tests and embedding code that
    /// already knows where the server lives.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            request_timeout: Duration::from_secs(30),
            events_retry: Duration::from_millis(500),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("MOVIELAB_BASE_URL");
        env::remove_var("MOVIELAB_TIMEOUT_SECS");
        env::remove_var("MOVIELAB_EVENTS_RETRY_MS");

        let config = ClientConfig::from_env();

        assert_eq!(config.base_url, "http://127.0.0.1:8080/movielab");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.events_retry, Duration::from_millis(500));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ClientConfig::with_base_url("http://localhost:9000/api/");
        assert_eq!(config.base_url, "http://localhost:9000/api");
    }
}
