//! Shared utilities and common types for the FaceGate workspace
//!
//! This crate provides common functionality used across the workflow crates:
//! - Configuration types
//! - Utility functions (username normalization, validation helpers)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LogFormat, LoggingConfig, RecognitionConfig};
pub use utils::validation;
