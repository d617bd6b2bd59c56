//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `recognition` - Recognition service endpoint and retry configuration

pub mod environment;
pub mod recognition;

// Re-export commonly used types
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use recognition::RecognitionConfig;
