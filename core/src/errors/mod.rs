//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{RecognitionError, ValidationError, WorkflowError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    #[error(transparent)]
    Recognition(#[from] RecognitionError),
}

pub type DomainResult<T> = Result<T, DomainError>;
