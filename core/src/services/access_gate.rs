//! Access gate: the thin commit step between the session state machine
//! and whatever the surrounding application protects.

use crate::domain::entities::{Session, SessionState};

/// What the presentation layer is allowed to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationView {
    /// The protected area, for the named user
    Protected { username: String },
    /// The public login flow
    Public,
}

/// Applies the state machine's decision to the protected surface
pub struct AccessGate;

impl AccessGate {
    /// Commit the session's current decision
    ///
    /// The decision reads `session.state` and nothing else; in particular
    /// it never inspects `last_result`, so stale or tampered outcome data
    /// cannot open the protected view without having passed the guarded
    /// `Continue` transition.
    pub fn commit(session: &Session) -> AuthorizationView {
        match session.state() {
            SessionState::Authenticated => AuthorizationView::Protected {
                username: session.username().unwrap_or_default().to_string(),
            },
            _ => AuthorizationView::Public,
        }
    }
}
