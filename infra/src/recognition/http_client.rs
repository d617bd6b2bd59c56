//! Reqwest-based recognition service client
//!
//! Submits the multipart verification request (`file` + `username`
//! fields), decodes the JSON response contract, and maps error bodies
//! onto domain errors. Transport failures and server-side (5xx) statuses
//! are retried with exponential backoff.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use fg_core::domain::value_objects::{VerificationRequest, VerificationResponse};
use fg_core::errors::RecognitionError;
use fg_core::services::workflow::RecognitionClient;
use fg_shared::config::RecognitionConfig;

use crate::InfrastructureError;

/// Error body returned by the recognition service on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Health probe response from the recognition service
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    /// Service status string ("ok" when healthy)
    pub status: String,
    /// Whether the recognition model is loaded
    pub model_loaded: bool,
    /// Number of identity classes the model knows
    #[serde(default)]
    pub num_classes: Option<u32>,
    /// Number of user records loaded for status checks
    #[serde(default)]
    pub users_loaded: Option<u32>,
}

/// HTTP implementation of the recognition client
pub struct HttpRecognitionClient {
    client: reqwest::Client,
    config: RecognitionConfig,
}

impl HttpRecognitionClient {
    /// Create a new client from configuration
    pub fn new(config: RecognitionConfig) -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfrastructureError::Http(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            timeout_secs = config.request_timeout_secs,
            "Recognition client initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(RecognitionConfig::from_env())
    }

    /// Probe the service's health endpoint
    pub async fn health(&self) -> Result<HealthStatus, RecognitionError> {
        let response = self
            .client
            .get(self.config.health_url())
            .send()
            .await
            .map_err(|e| RecognitionError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| RecognitionError::InvalidResponse {
                message: e.to_string(),
            })
    }

    /// Single submission attempt, no retries
    async fn post_verification(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RecognitionError> {
        let file_part = Part::bytes(request.image().bytes.clone())
            .file_name(format!("face.{}", request.format().extension()))
            .mime_str(request.format().mime_type())
            .map_err(|e| RecognitionError::Transport {
                message: e.to_string(),
            })?;

        let form = Form::new()
            .part("file", file_part)
            .text("username", request.username().to_string());

        let response = self
            .client
            .post(self.config.verify_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| RecognitionError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        response
            .json::<VerificationResponse>()
            .await
            .map_err(|e| RecognitionError::InvalidResponse {
                message: e.to_string(),
            })
    }
}

/// Map a non-success response onto a status error
///
/// The service reports failures as `{ "error": "..." }`; when the field is
/// missing or the body is not JSON, a status-coded generic message is used.
pub(crate) fn status_error(status: u16, body: &str) -> RecognitionError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("Server error: {}", status));
    RecognitionError::Status { status, message }
}

/// Whether a failed attempt is worth retrying
pub(crate) fn is_retryable(error: &RecognitionError) -> bool {
    match error {
        RecognitionError::Transport { .. } => true,
        RecognitionError::Status { status, .. } => *status >= 500,
        RecognitionError::InvalidResponse { .. } => false,
    }
}

#[async_trait]
impl RecognitionClient for HttpRecognitionClient {
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RecognitionError> {
        let mut attempt = 0u32;
        loop {
            match self.post_verification(request).await {
                Ok(response) => {
                    debug!(
                        username = request.username(),
                        is_authenticated = response.is_authenticated,
                        "Verification response received"
                    );
                    return Ok(response);
                }
                Err(err) if is_retryable(&err) && attempt < self.config.max_retries => {
                    let delay = self.config.retry_delay_ms * 2u64.pow(attempt);
                    warn!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay,
                        error = %err,
                        "Verification attempt failed, retrying"
                    );
                    tokio::time::sleep(Duration::from_millis(delay)).await;
                    attempt += 1;
                }
                Err(err) => {
                    warn!(error = %err, "Verification request failed");
                    return Err(err);
                }
            }
        }
    }
}
