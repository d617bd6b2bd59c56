//! Workflow service orchestrating the verification session

use std::sync::Arc;

use crate::domain::entities::{Session, SessionState};
use crate::domain::value_objects::{ImageUpload, VerificationOutcome, VerificationRequest};
use crate::errors::{DomainError, DomainResult};
use crate::services::interpreter::interpret;

use super::traits::RecognitionClient;

/// Drives a single verification session from login to the access gate
///
/// Owns the session exclusively; there is no concurrent writer. The only
/// suspension point is the call to the recognition client, and at most one
/// request is in flight at a time.
pub struct WorkflowService<R: RecognitionClient> {
    /// Client for the recognition service
    client: Arc<R>,
    /// The session this service mutates
    session: Session,
}

impl<R: RecognitionClient> WorkflowService<R> {
    /// Create a workflow service with a fresh session
    pub fn new(client: Arc<R>) -> Self {
        Self {
            client,
            session: Session::new(),
        }
    }

    /// Read access to the owned session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Submit the claimed username and advance to image collection
    pub fn submit_username(&mut self, name: &str) -> DomainResult<()> {
        self.session.submit_username(name)?;
        tracing::info!(
            session_id = %self.session.id,
            event = "username_collected",
            "Claimed identity collected"
        );
        Ok(())
    }

    /// Submit a face image for verification
    ///
    /// Builds the request (validation failures leave the session on the
    /// image step), marks the request in flight, calls the service,
    /// interprets the response, and stores the outcome. Transport and
    /// service errors return the session to the image step so the user can
    /// resubmit.
    pub async fn submit_image(&mut self, image: ImageUpload) -> DomainResult<&VerificationOutcome> {
        let username = self
            .session
            .username()
            .ok_or(crate::errors::WorkflowError::MissingUsername)?
            .to_string();

        // Validate before any state change
        let request = VerificationRequest::build(&username, image)?;

        self.session.begin_verification()?;
        tracing::info!(
            session_id = %self.session.id,
            username = request.username(),
            size_bytes = request.image().size_bytes(),
            event = "verification_submitted",
            "Submitted verification request"
        );

        match self.client.verify(&request).await {
            Ok(response) => {
                let outcome = interpret(&response, request.username());
                tracing::info!(
                    session_id = %self.session.id,
                    granted = outcome.granted,
                    support_required = outcome.support_required,
                    event = "verification_result",
                    "Verification result available"
                );
                Ok(self.session.store_outcome(outcome)?)
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %self.session.id,
                    error = %err,
                    event = "verification_failed",
                    "Verification request failed; returning to image step"
                );
                self.session.abort_verification();
                Err(DomainError::Recognition(err))
            }
        }
    }

    /// Attempt the guarded transition into the protected area
    ///
    /// Returns the resulting state; with a denied outcome this is a no-op
    /// and the state stays `ResultAvailable`.
    pub fn continue_to_protected(&mut self) -> DomainResult<SessionState> {
        let state = self.session.continue_to_protected()?;
        if state == SessionState::Authenticated {
            tracing::info!(
                session_id = %self.session.id,
                event = "access_granted",
                "Session authenticated"
            );
        }
        Ok(state)
    }

    /// Discard the current outcome and return to image submission
    pub fn retry(&mut self) -> DomainResult<()> {
        self.session.retry()?;
        Ok(())
    }

    /// Reset the whole session to the login step
    pub fn back(&mut self) {
        self.session.back();
    }

    /// Log out of the protected area
    pub fn logout(&mut self) -> DomainResult<()> {
        self.session.logout()?;
        tracing::info!(
            session_id = %self.session.id,
            event = "logged_out",
            "Session logged out"
        );
        Ok(())
    }
}
