//! Recognition service configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default base URL of the face recognition service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Configuration for the outbound recognition service client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RecognitionConfig {
    /// Base URL of the recognition service
    pub base_url: String,
    /// Timeout for verification requests in seconds
    pub request_timeout_secs: u64,
    /// Maximum retry attempts for transport failures
    pub max_retries: u32,
    /// Initial retry delay in milliseconds (doubled per attempt)
    pub retry_delay_ms: u64,
}

impl RecognitionConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `FACEGATE_RECOGNITION_URL`, `FACEGATE_REQUEST_TIMEOUT_SECS`,
    /// `FACEGATE_MAX_RETRIES` and `FACEGATE_RETRY_DELAY_MS`, falling back to
    /// defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("FACEGATE_RECOGNITION_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: env::var("FACEGATE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            max_retries: env::var("FACEGATE_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2),
            retry_delay_ms: env::var("FACEGATE_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
        }
    }

    /// Full URL of the verification endpoint
    pub fn verify_url(&self) -> String {
        format!("{}/verify_face", self.base_url.trim_end_matches('/'))
    }

    /// Full URL of the health probe endpoint
    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url.trim_end_matches('/'))
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
            max_retries: 2,
            retry_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let config = RecognitionConfig {
            base_url: "http://faces.internal:5000/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.verify_url(), "http://faces.internal:5000/verify_face");
        assert_eq!(config.health_url(), "http://faces.internal:5000/health");
    }

    #[test]
    fn test_default_config() {
        let config = RecognitionConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.max_retries, 2);
    }
}
