//! Interaction Rules
//!
//! Target-independent pieces of the controller: the reconciliation strategy,
//! signup input validation, and the user-facing texts. The browser UI applies
//! the same rules through this module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const VALIDATION_MESSAGE: &str = "Please provide an email and select an activity.";
pub const LOAD_FAILED: &str = "Failed to load activities";
pub const LOAD_ERROR: &str = "Error loading activities";
pub const SIGNUP_SUCCEEDED: &str = "Signed up successfully";
pub const SIGNUP_FAILED: &str = "Signup failed";
pub const UNREGISTER_FAILED: &str = "Failed to unregister";

/// Success text after removing a participant
pub fn unregistered_text(email: &str, activity: &str) -> String {
    format!("Unregistered {} from {}", email, activity)
}

/// Success text after a signup: the server's message unless it is blank
pub fn signup_success_text(message: Option<&str>) -> String {
    failure_text(message, SIGNUP_SUCCEEDED)
}

/// Pick the server's explanation when there is one
pub fn failure_text(detail: Option<&str>, fallback: &str) -> String {
    detail
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// How the board is brought back in line with the server after a signup
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReconcileStrategy {
    /// Re-fetch the whole board, then restore the selected activity
    #[default]
    Refresh,
    /// Append the new participant to the local board without re-fetching
    Patch,
}

impl fmt::Display for ReconcileStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileStrategy::Refresh => write!(f, "refresh"),
            ReconcileStrategy::Patch => write!(f, "patch"),
        }
    }
}

impl FromStr for ReconcileStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "refresh" => Ok(ReconcileStrategy::Refresh),
            "patch" => Ok(ReconcileStrategy::Patch),
            other => Err(format!("Unknown reconcile strategy: {} (use refresh or patch)", other)),
        }
    }
}

/// A signup that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub activity: String,
    pub email: String,
}

impl SignupRequest {
    /// Trim the email and require both fields.
    ///
    /// The activity is taken as-is: it comes from the select, not free text.
    pub fn validate(activity: &str, email: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || activity.is_empty() {
            return Err(VALIDATION_MESSAGE);
        }
        Ok(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_email() {
        let req = SignupRequest::validate("Chess", "  a@x.com ").unwrap();
        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.activity, "Chess");
    }

    #[test]
    fn test_validate_rejects_blank_inputs() {
        assert_eq!(SignupRequest::validate("Chess", "   "), Err(VALIDATION_MESSAGE));
        assert_eq!(SignupRequest::validate("", "a@x.com"), Err(VALIDATION_MESSAGE));
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(failure_text(Some("Activity full"), SIGNUP_FAILED), "Activity full");
        assert_eq!(failure_text(None, SIGNUP_FAILED), SIGNUP_FAILED);
        assert_eq!(failure_text(Some(" "), UNREGISTER_FAILED), UNREGISTER_FAILED);
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Patch".parse(), Ok(ReconcileStrategy::Patch));
        assert_eq!("refresh".parse(), Ok(ReconcileStrategy::Refresh));
        assert!("merge".parse::<ReconcileStrategy>().is_err());
        assert_eq!(ReconcileStrategy::default(), ReconcileStrategy::Refresh);
    }

    #[test]
    fn test_signup_success_text_ignores_blank_message() {
        assert_eq!(signup_success_text(Some("")), SIGNUP_SUCCEEDED);
        assert_eq!(signup_success_text(Some("  ")), SIGNUP_SUCCEEDED);
        assert_eq!(signup_success_text(None), SIGNUP_SUCCEEDED);
        assert_eq!(
            signup_success_text(Some("Signed up a@x.com for Chess")),
            "Signed up a@x.com for Chess"
        );
    }

    #[test]
    fn test_unregistered_text() {
        assert_eq!(
            unregistered_text("a@x.com", "Chess"),
            "Unregistered a@x.com from Chess"
        );
    }
}
