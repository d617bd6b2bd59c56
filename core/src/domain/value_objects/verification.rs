//! Verification response contract and interpreted outcome types.
//!
//! `VerificationResponse` mirrors the recognition service's JSON body
//! field-for-field; it is read-only to this core. `VerificationOutcome` is
//! the interpreted result the rest of the workflow consumes.

use serde::{Deserialize, Serialize};

/// Account status reported by the recognition service
///
/// Unknown values (the backend also emits `not_found`) are preserved in
/// `Other` and treated as non-approved everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserStatus {
    Approved,
    Pending,
    Denied,
    Other(String),
}

impl From<String> for UserStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "approved" => UserStatus::Approved,
            "pending" => UserStatus::Pending,
            "denied" => UserStatus::Denied,
            _ => UserStatus::Other(value),
        }
    }
}

impl From<UserStatus> for String {
    fn from(status: UserStatus) -> Self {
        status.to_string()
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Approved => write!(f, "approved"),
            UserStatus::Pending => write!(f, "pending"),
            UserStatus::Denied => write!(f, "denied"),
            UserStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

/// The three independent pass/fail gates reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationDetails {
    /// Recognition confidence cleared the service-side threshold
    pub confidence_met: bool,
    /// Predicted identity matches the claimed username
    pub names_match: bool,
    /// The matched account is approved
    pub user_approved: bool,
}

impl VerificationDetails {
    /// True when every gate passed
    pub fn all_passed(&self) -> bool {
        self.confidence_met && self.names_match && self.user_approved
    }
}

/// Raw verification response from the recognition service (external contract)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    /// Top-level decision; authoritative for access
    pub is_authenticated: bool,
    /// Identity the recognizer predicted for the submitted face
    pub predicted_name: String,
    /// Recognition confidence in [0.0, 1.0]
    pub confidence: f64,
    /// Echo of the submitted username
    pub provided_username: String,
    /// Account status of the matched user
    pub user_status: UserStatus,
    /// Redundant copy of `details.names_match`
    pub names_match: bool,
    /// Redundant copy of `details.user_approved`
    pub is_approved: bool,
    /// Optional human-readable summary from the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-gate breakdown
    pub details: VerificationDetails,
}

/// Fixed labels of the three verification steps, in pipeline order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepLabel {
    FaceRecognition,
    NameMatching,
    AccountStatus,
}

impl std::fmt::Display for StepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepLabel::FaceRecognition => write!(f, "Face Recognition"),
            StepLabel::NameMatching => write!(f, "Name Matching"),
            StepLabel::AccountStatus => write!(f, "Account Status"),
        }
    }
}

/// One row of the interpreted verification breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationStep {
    pub label: StepLabel,
    pub passed: bool,
    pub detail_text: String,
}

/// Fully interpreted result of a verification attempt
///
/// Immutable once produced; a new submission replaces the whole value,
/// never mutates it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Whether access is granted (mirrors the service's top-level flag)
    pub granted: bool,
    /// Breakdown of the three gates, fixed order
    pub steps: [VerificationStep; 3],
    /// Single highest-priority failure explanation when not granted
    pub failure_reason: Option<String>,
    /// True iff the account status is `denied`; retry is pointless and the
    /// user should be routed to support instead
    pub support_required: bool,
}
