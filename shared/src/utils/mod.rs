//! Utility modules for common operations

pub mod validation;
