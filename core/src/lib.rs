//! # FaceGate Core
//!
//! Core business logic and domain layer for the FaceGate client workflow.
//! This crate contains the session state machine, the verification request
//! builder, the verification-result interpreter, the access gate, and the
//! error types that tie them together.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
