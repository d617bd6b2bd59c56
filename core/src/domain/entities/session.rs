//! Session entity owning the identity-verification workflow state.
//!
//! One session exists per client instance; it is created at process start
//! in `Unauthenticated` and mutated only through the transition methods
//! below. The guarded `continue_to_protected` transition is the single
//! access-control enforcement point of the client-side flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::VerificationOutcome;
use crate::errors::WorkflowError;
use fg_shared::utils::validation::{normalize_username, validators};

/// Workflow progression states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No identity claimed yet
    Unauthenticated,
    /// Username collected, awaiting image submission
    CredentialCollected,
    /// A verification request is in flight
    AwaitingVerification,
    /// An interpreted outcome is available for review
    ResultAvailable,
    /// Access granted; exited only via logout
    Authenticated,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionState::Unauthenticated => "Unauthenticated",
            SessionState::CredentialCollected => "CredentialCollected",
            SessionState::AwaitingVerification => "AwaitingVerification",
            SessionState::ResultAvailable => "ResultAvailable",
            SessionState::Authenticated => "Authenticated",
        };
        write!(f, "{}", name)
    }
}

/// A single client verification session
///
/// Invariant: `last_result` is present only in `ResultAvailable` and
/// `Authenticated`, and is cleared on every transition back to
/// `CredentialCollected` or `Unauthenticated`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Unique identifier for this session
    pub id: Uuid,
    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
    state: SessionState,
    username: Option<String>,
    last_result: Option<VerificationOutcome>,
}

impl Session {
    /// Create a fresh session in `Unauthenticated`
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            state: SessionState::Unauthenticated,
            username: None,
            last_result: None,
        }
    }

    /// Current workflow state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The normalized claimed username, if collected
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The outcome of the most recent verification attempt, if any
    pub fn last_result(&self) -> Option<&VerificationOutcome> {
        self.last_result.as_ref()
    }

    /// SubmitUsername: `Unauthenticated -> CredentialCollected`
    ///
    /// Guard: the name must be non-empty after trimming. The stored
    /// username is normalized once here.
    pub fn submit_username(&mut self, name: &str) -> Result<(), WorkflowError> {
        if self.state != SessionState::Unauthenticated {
            return Err(self.invalid("SubmitUsername"));
        }
        if !validators::not_empty(name) {
            return Err(WorkflowError::MissingUsername);
        }
        self.username = Some(normalize_username(name));
        self.state = SessionState::CredentialCollected;
        Ok(())
    }

    /// Mark a verification request as in flight:
    /// `CredentialCollected -> AwaitingVerification`
    ///
    /// At most one request may be in flight; a second attempt while
    /// awaiting is rejected.
    pub fn begin_verification(&mut self) -> Result<(), WorkflowError> {
        match self.state {
            SessionState::CredentialCollected => {
                if self.username.is_none() {
                    return Err(WorkflowError::MissingUsername);
                }
                self.state = SessionState::AwaitingVerification;
                Ok(())
            }
            SessionState::AwaitingVerification => Err(WorkflowError::VerificationInFlight),
            _ => Err(self.invalid("BeginVerification")),
        }
    }

    /// SubmitImage resolution: `AwaitingVerification -> ResultAvailable`
    ///
    /// Replaces any previous outcome wholesale and returns a reference to
    /// the stored value.
    pub fn store_outcome(
        &mut self,
        outcome: VerificationOutcome,
    ) -> Result<&VerificationOutcome, WorkflowError> {
        if self.state != SessionState::AwaitingVerification {
            return Err(self.invalid("StoreOutcome"));
        }
        self.last_result = Some(outcome);
        self.state = SessionState::ResultAvailable;
        // Stored on the line above; the invariant makes this irrefutable.
        match self.last_result.as_ref() {
            Some(result) => Ok(result),
            None => Err(self.invalid("StoreOutcome")),
        }
    }

    /// Abort an in-flight verification after a transport failure:
    /// `AwaitingVerification -> CredentialCollected`
    ///
    /// The user stays on the image-submission step and may resubmit. A
    /// no-op in any other state.
    pub fn abort_verification(&mut self) {
        if self.state == SessionState::AwaitingVerification {
            self.last_result = None;
            self.state = SessionState::CredentialCollected;
        }
    }

    /// Continue: guarded `ResultAvailable -> Authenticated`
    ///
    /// The single access-control enforcement point. With a denied outcome
    /// the event is ignored and the state is unchanged, so callers can
    /// re-present the retry affordance without special-casing.
    pub fn continue_to_protected(&mut self) -> Result<SessionState, WorkflowError> {
        if self.state != SessionState::ResultAvailable {
            return Err(self.invalid("Continue"));
        }
        if self.last_result.as_ref().is_some_and(|r| r.granted) {
            self.state = SessionState::Authenticated;
        }
        Ok(self.state)
    }

    /// Retry: `ResultAvailable -> CredentialCollected`, outcome cleared
    pub fn retry(&mut self) -> Result<(), WorkflowError> {
        if self.state != SessionState::ResultAvailable {
            return Err(self.invalid("Retry"));
        }
        self.last_result = None;
        self.state = SessionState::CredentialCollected;
        Ok(())
    }

    /// Back: any state -> `Unauthenticated`, username and outcome cleared
    pub fn back(&mut self) {
        self.reset();
    }

    /// Logout: `Authenticated -> Unauthenticated`, everything cleared
    pub fn logout(&mut self) -> Result<(), WorkflowError> {
        if self.state != SessionState::Authenticated {
            return Err(self.invalid("Logout"));
        }
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.username = None;
        self.last_result = None;
    }

    fn invalid(&self, event: &str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            state: self.state.to_string(),
            event: event.to_string(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
