//! Business services implementing the verification workflow.

pub mod access_gate;
pub mod interpreter;
pub mod workflow;

// Re-export main service types
pub use access_gate::{AccessGate, AuthorizationView};
pub use interpreter::interpret;
pub use workflow::{RecognitionClient, WorkflowService};
