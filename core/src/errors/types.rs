//! Error type definitions for request validation, workflow progression,
//! and the recognition service boundary.

use thiserror::Error;

/// Validation errors raised while building a verification request
///
/// These are non-fatal: the workflow stays on the current step and the
/// user may correct the input and resubmit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username is required")]
    EmptyUsername,

    #[error("Username must be at least {min} characters long")]
    UsernameTooShort { min: usize },

    #[error("Unsupported image type: {mime_type} (expected JPG, PNG, or GIF)")]
    UnsupportedImageType { mime_type: String },

    #[error("Image file size must be less than {max_bytes} bytes (got {size_bytes})")]
    ImageTooLarge { size_bytes: u64, max_bytes: u64 },
}

/// Workflow errors raised by session state transitions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Invalid transition: {event} not allowed in state {state}")]
    InvalidTransition { state: String, event: String },

    #[error("A verification request is already in flight")]
    VerificationInFlight,

    #[error("No username collected for this session")]
    MissingUsername,
}

/// Errors crossing the recognition service boundary
///
/// Transport failures and non-success statuses are recoverable: the
/// workflow returns to the image-submission step and the user may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    #[error("Recognition service unreachable: {message}")]
    Transport { message: String },

    #[error("Recognition service error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response from recognition service: {message}")]
    InvalidResponse { message: String },
}
