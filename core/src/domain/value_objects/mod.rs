//! Value objects for the verification workflow.

pub mod request;
pub mod verification;

// Re-export commonly used types
pub use request::{
    ImageFormat, ImageUpload, VerificationRequest, MAX_IMAGE_BYTES, MIN_USERNAME_CHARS,
};
pub use verification::{
    StepLabel, UserStatus, VerificationDetails, VerificationOutcome, VerificationResponse,
    VerificationStep,
};
