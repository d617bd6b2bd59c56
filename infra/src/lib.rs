//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the FaceGate
//! workflow. It provides the concrete HTTP client for the remote face
//! recognition service; the domain-side seam is the `RecognitionClient`
//! trait defined in `fg_core`.

use thiserror::Error;

/// Recognition service client module
pub mod recognition;

pub use recognition::{HealthStatus, HttpRecognitionClient};

/// Infrastructure-level errors (configuration and client construction)
///
/// Errors crossing the service boundary at request time are reported as
/// `fg_core::errors::RecognitionError` instead.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}
