//! Workflow service module for the verification session
//!
//! This module drives the full workflow: collecting the claimed username,
//! building and submitting the verification request through the
//! `RecognitionClient` seam, interpreting the response, and exposing the
//! session transitions (continue, retry, back, logout).

mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use service::WorkflowService;
pub use traits::RecognitionClient;
