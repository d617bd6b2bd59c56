//! HTTP client for the face recognition service

mod http_client;

#[cfg(test)]
mod tests;

pub use http_client::{HealthStatus, HttpRecognitionClient};
