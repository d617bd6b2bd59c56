//! Trait seam for the external recognition service

use async_trait::async_trait;

use crate::domain::value_objects::{VerificationRequest, VerificationResponse};
use crate::errors::RecognitionError;

/// Client for the remote face recognition service
///
/// The remote algorithm is opaque; implementations only carry the request
/// across the wire and hand back the parsed response contract.
#[async_trait]
pub trait RecognitionClient: Send + Sync {
    /// Submit a verification request and await the service's response
    async fn verify(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationResponse, RecognitionError>;
}
