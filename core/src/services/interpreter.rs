//! Verification-result interpreter.
//!
//! A pure mapping from the recognition service's raw response to the
//! structured `VerificationOutcome` the workflow consumes: an overall
//! grant/deny decision, the fixed-order step breakdown, and a single
//! ranked failure explanation.

use crate::domain::value_objects::{
    StepLabel, UserStatus, VerificationOutcome, VerificationResponse, VerificationStep,
};

/// Interpret a raw verification response against the claimed username
///
/// The service's top-level `is_authenticated` flag is authoritative for
/// the grant decision; the step breakdown is recomputed independently from
/// `details` for display consistency. Deterministic: the same response and
/// username always produce an identical outcome.
pub fn interpret(response: &VerificationResponse, claimed_username: &str) -> VerificationOutcome {
    let granted = response.is_authenticated;
    let steps = build_steps(response, claimed_username);

    if granted && !response.details.all_passed() {
        // Upstream contract gap: the flag and the gates can disagree. The
        // flag wins, observed behavior preserved.
        tracing::debug!(
            event = "gate_flag_mismatch",
            confidence_met = response.details.confidence_met,
            names_match = response.details.names_match,
            user_approved = response.details.user_approved,
            "Service granted access while at least one gate reports failure"
        );
    }

    let failure_reason = if granted {
        None
    } else {
        Some(failure_reason(response, claimed_username))
    };

    VerificationOutcome {
        granted,
        steps,
        failure_reason,
        support_required: response.user_status == UserStatus::Denied,
    }
}

/// Build the three-step breakdown in fixed pipeline order
fn build_steps(response: &VerificationResponse, claimed_username: &str) -> [VerificationStep; 3] {
    let details = &response.details;

    [
        VerificationStep {
            label: StepLabel::FaceRecognition,
            passed: details.confidence_met,
            detail_text: format!("Confidence: {}", percent(response.confidence)),
        },
        VerificationStep {
            label: StepLabel::NameMatching,
            passed: details.names_match,
            detail_text: if details.names_match {
                format!("Matched: {}", response.predicted_name)
            } else {
                format!(
                    "Expected: {}, Got: {}",
                    claimed_username, response.predicted_name
                )
            },
        },
        VerificationStep {
            label: StepLabel::AccountStatus,
            passed: details.user_approved,
            detail_text: format!("Status: {}", response.user_status),
        },
    ]
}

/// Single-cause failure explanation, by strict priority
///
/// Confidence is a precondition for name matching, which is a
/// precondition for authorization; the earliest unmet gate in that causal
/// chain is reported and later gates are not, even when also unmet.
fn failure_reason(response: &VerificationResponse, claimed_username: &str) -> String {
    let details = &response.details;

    if !details.confidence_met {
        return format!(
            "Low confidence in face recognition: {}",
            percent(response.confidence)
        );
    }
    if !details.names_match {
        return format!(
            "Identity mismatch: Recognized as \"{}\", but you entered \"{}\"",
            response.predicted_name, claimed_username
        );
    }
    if !details.user_approved {
        return format!(
            "Access denied: Your account status is \"{}\"",
            response.user_status
        );
    }

    response
        .message
        .clone()
        .unwrap_or_else(|| "Verification failed".to_string())
}

/// Render a [0.0, 1.0] confidence as a percentage with one decimal place
fn percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::VerificationDetails;

    fn response(
        is_authenticated: bool,
        details: VerificationDetails,
        user_status: UserStatus,
    ) -> VerificationResponse {
        VerificationResponse {
            is_authenticated,
            predicted_name: "bob".to_string(),
            confidence: 0.42,
            provided_username: "alice".to_string(),
            user_status,
            names_match: details.names_match,
            is_approved: details.user_approved,
            message: None,
            details,
        }
    }

    #[test]
    fn test_granted_outcome_has_no_failure_reason() {
        let details = VerificationDetails {
            confidence_met: true,
            names_match: true,
            user_approved: true,
        };
        let mut resp = response(true, details, UserStatus::Approved);
        resp.predicted_name = "alice".to_string();
        resp.confidence = 0.93;

        let outcome = interpret(&resp, "alice");
        assert!(outcome.granted);
        assert!(outcome.failure_reason.is_none());
        assert!(!outcome.support_required);
        assert!(outcome.steps.iter().all(|s| s.passed));
        assert_eq!(outcome.steps[0].detail_text, "Confidence: 93.0%");
        assert_eq!(outcome.steps[1].detail_text, "Matched: alice");
        assert_eq!(outcome.steps[2].detail_text, "Status: approved");
    }

    #[test]
    fn test_confidence_failure_has_priority_over_all_others() {
        // Every gate failed; only the confidence cause may be reported
        let details = VerificationDetails {
            confidence_met: false,
            names_match: false,
            user_approved: false,
        };
        let outcome = interpret(&response(false, details, UserStatus::Denied), "alice");

        let reason = outcome.failure_reason.unwrap();
        assert_eq!(reason, "Low confidence in face recognition: 42.0%");
        assert!(!reason.contains("mismatch"));
        assert!(!reason.contains("status"));
    }

    #[test]
    fn test_name_mismatch_reported_when_confidence_met() {
        let details = VerificationDetails {
            confidence_met: true,
            names_match: false,
            user_approved: false,
        };
        let outcome = interpret(&response(false, details, UserStatus::Approved), "alice");

        assert_eq!(
            outcome.failure_reason.unwrap(),
            "Identity mismatch: Recognized as \"bob\", but you entered \"alice\""
        );
        assert_eq!(outcome.steps[1].detail_text, "Expected: alice, Got: bob");
    }

    #[test]
    fn test_account_status_reported_last() {
        let details = VerificationDetails {
            confidence_met: true,
            names_match: true,
            user_approved: false,
        };
        let outcome = interpret(&response(false, details, UserStatus::Pending), "bob");

        assert_eq!(
            outcome.failure_reason.unwrap(),
            "Access denied: Your account status is \"pending\""
        );
        assert!(!outcome.support_required);
    }

    #[test]
    fn test_fallback_uses_service_message() {
        let details = VerificationDetails {
            confidence_met: true,
            names_match: true,
            user_approved: true,
        };
        let mut resp = response(false, details, UserStatus::Approved);
        resp.message = Some("Model unavailable".to_string());
        let outcome = interpret(&resp, "alice");
        assert_eq!(outcome.failure_reason.unwrap(), "Model unavailable");

        resp.message = None;
        let outcome = interpret(&resp, "alice");
        assert_eq!(outcome.failure_reason.unwrap(), "Verification failed");
    }

    #[test]
    fn test_denied_status_requires_support() {
        let details = VerificationDetails {
            confidence_met: true,
            names_match: true,
            user_approved: false,
        };
        let outcome = interpret(&response(false, details, UserStatus::Denied), "alice");
        assert!(outcome.support_required);

        // Unknown statuses are non-approved but do not route to support
        let details = VerificationDetails {
            confidence_met: true,
            names_match: true,
            user_approved: false,
        };
        let outcome = interpret(
            &response(false, details, UserStatus::Other("not_found".to_string())),
            "alice",
        );
        assert!(!outcome.support_required);
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let details = VerificationDetails {
            confidence_met: false,
            names_match: true,
            user_approved: true,
        };
        let resp = response(false, details, UserStatus::Approved);

        let first = interpret(&resp, "alice");
        let second = interpret(&resp, "alice");
        assert_eq!(first, second);
    }

    #[test]
    fn test_flag_wins_over_gates() {
        // Contract gap preserved: granted even though a gate failed
        let details = VerificationDetails {
            confidence_met: true,
            names_match: false,
            user_approved: true,
        };
        let outcome = interpret(&response(true, details, UserStatus::Approved), "alice");
        assert!(outcome.granted);
        assert!(outcome.failure_reason.is_none());
        assert!(!outcome.steps[1].passed);
    }
}
