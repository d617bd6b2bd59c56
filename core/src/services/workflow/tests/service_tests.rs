//! Unit tests for the workflow service

use std::sync::Arc;

use crate::domain::entities::SessionState;
use crate::domain::value_objects::ImageUpload;
use crate::errors::{DomainError, RecognitionError, ValidationError};
use crate::services::access_gate::{AccessGate, AuthorizationView};
use crate::services::workflow::WorkflowService;

use super::mocks::{
    approved_response, denied_account_response, low_confidence_response, MockRecognitionClient,
};

fn jpeg(size: usize) -> ImageUpload {
    ImageUpload::new(vec![0xD8; size], "image/jpeg")
}

#[tokio::test]
async fn test_full_flow_to_authenticated() {
    // Scenario: valid username, valid 2 MB JPEG, service approves
    let client = Arc::new(MockRecognitionClient::with_response(approved_response(
        "alice",
    )));
    let mut workflow = WorkflowService::new(client.clone());

    workflow.submit_username("alice").unwrap();
    let outcome = workflow.submit_image(jpeg(2 * 1024 * 1024)).await.unwrap();

    assert!(outcome.granted);
    assert!(outcome.steps.iter().all(|s| s.passed));
    assert_eq!(workflow.session().state(), SessionState::ResultAvailable);

    let state = workflow.continue_to_protected().unwrap();
    assert_eq!(state, SessionState::Authenticated);
    assert_eq!(
        AccessGate::commit(workflow.session()),
        AuthorizationView::Protected {
            username: "alice".to_string()
        }
    );
}

#[tokio::test]
async fn test_low_confidence_denial_and_retry() {
    // Scenario: confidence gate fails at 0.42
    let client = Arc::new(MockRecognitionClient::with_response(
        low_confidence_response("alice", 0.42),
    ));
    let mut workflow = WorkflowService::new(client);

    workflow.submit_username("alice").unwrap();
    let outcome = workflow.submit_image(jpeg(1024)).await.unwrap();

    assert!(!outcome.granted);
    assert!(outcome.failure_reason.as_ref().unwrap().contains("42.0%"));
    assert!(!outcome.support_required);

    // Denied continue leaves the session on the result step
    let state = workflow.continue_to_protected().unwrap();
    assert_eq!(state, SessionState::ResultAvailable);
    assert_eq!(AccessGate::commit(workflow.session()), AuthorizationView::Public);

    // Retry clears the outcome and returns to the image step
    workflow.retry().unwrap();
    assert_eq!(workflow.session().state(), SessionState::CredentialCollected);
    assert!(workflow.session().last_result().is_none());
}

#[tokio::test]
async fn test_denied_account_routes_to_support() {
    let client = Arc::new(MockRecognitionClient::with_response(
        denied_account_response("alice"),
    ));
    let mut workflow = WorkflowService::new(client);

    workflow.submit_username("alice").unwrap();
    let outcome = workflow.submit_image(jpeg(1024)).await.unwrap();

    assert!(!outcome.granted);
    assert!(outcome.support_required);

    // Back still resets everything
    workflow.back();
    assert_eq!(workflow.session().state(), SessionState::Unauthenticated);
    assert!(workflow.session().username().is_none());
    assert!(workflow.session().last_result().is_none());
}

#[tokio::test]
async fn test_username_is_normalized_before_submission() {
    let client = Arc::new(MockRecognitionClient::with_response(approved_response(
        "alice",
    )));
    let mut workflow = WorkflowService::new(client.clone());

    workflow.submit_username("  Alice ").unwrap();
    workflow.submit_image(jpeg(512)).await.unwrap();

    let seen = client.seen_usernames.lock().unwrap();
    assert_eq!(seen.as_slice(), ["alice"]);
}

#[tokio::test]
async fn test_validation_failure_keeps_image_step_and_skips_service() {
    let client = Arc::new(MockRecognitionClient::with_response(approved_response(
        "alice",
    )));
    let mut workflow = WorkflowService::new(client.clone());
    workflow.submit_username("alice").unwrap();

    let oversized = jpeg(5 * 1024 * 1024);
    let err = workflow.submit_image(oversized).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationError::ImageTooLarge { .. })
    ));

    // No request was issued and the user may correct and resubmit
    assert_eq!(client.call_count(), 0);
    assert_eq!(workflow.session().state(), SessionState::CredentialCollected);
}

#[tokio::test]
async fn test_transport_failure_returns_to_image_step() {
    let client = Arc::new(MockRecognitionClient::failing(RecognitionError::Transport {
        message: "connection refused".to_string(),
    }));
    let mut workflow = WorkflowService::new(client.clone());
    workflow.submit_username("alice").unwrap();

    let err = workflow.submit_image(jpeg(1024)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Recognition(RecognitionError::Transport { .. })
    ));
    assert_eq!(workflow.session().state(), SessionState::CredentialCollected);
    assert!(workflow.session().last_result().is_none());

    // Resubmission is possible after the failure
    *client.response.lock().unwrap() = Ok(approved_response("alice"));
    let outcome = workflow.submit_image(jpeg(1024)).await.unwrap();
    assert!(outcome.granted);
}

#[tokio::test]
async fn test_logout_resets_session() {
    let client = Arc::new(MockRecognitionClient::with_response(approved_response(
        "alice",
    )));
    let mut workflow = WorkflowService::new(client);

    workflow.submit_username("alice").unwrap();
    workflow.submit_image(jpeg(1024)).await.unwrap();
    workflow.continue_to_protected().unwrap();
    assert_eq!(workflow.session().state(), SessionState::Authenticated);

    workflow.logout().unwrap();
    assert_eq!(workflow.session().state(), SessionState::Unauthenticated);
    assert_eq!(AccessGate::commit(workflow.session()), AuthorizationView::Public);
}
