//! Common validation utilities

/// Normalize a claimed username: trim surrounding whitespace and lower-case.
///
/// The recognition service compares usernames case-insensitively, so
/// normalization happens exactly once before a request is built and never
/// again downstream.
pub fn normalize_username(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a trimmed string has at least `min` characters
    pub fn length_at_least(value: &str, min: usize) -> bool {
        value.trim().chars().count() >= min
    }
}
