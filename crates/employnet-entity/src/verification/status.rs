//! Verification request status enumeration and transition table.
//!
//! Unlike the UI-gated workflow this replaces, transitions are enforced
//! server-side: any `(status, action)` pair outside the table below is
//! rejected with a Conflict, even if a client bypasses the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use employnet_core::AppError;

/// Status of a verification request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "verification_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    /// Created by the member; awaiting an admin.
    Waiting,
    /// An admin attached a verification URL; awaiting the member.
    Ready,
    /// Verification finished; terminal.
    Completed,
}

/// Actions that move a verification request through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationAction {
    /// Admin attaches a URL (`waiting -> ready`).
    Approve,
    /// Member or admin confirms completion (`ready -> completed`).
    Complete,
}

impl VerificationStatus {
    /// Whether this status accepts no further actions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Apply an action, returning the resulting status.
    ///
    /// Status never moves backward: `ready` cannot revert to `waiting`
    /// and `completed` is frozen.
    pub fn apply(&self, action: VerificationAction) -> Result<VerificationStatus, AppError> {
        match (self, action) {
            (Self::Waiting, VerificationAction::Approve) => Ok(Self::Ready),
            (Self::Ready, VerificationAction::Complete) => Ok(Self::Completed),
            (current, action) => Err(AppError::conflict(format!(
                "Cannot {action} a verification request in status '{current}'"
            ))),
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Ready => "ready",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for VerificationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Approve => "approve",
            Self::Complete => "complete",
        };
        write!(f, "{s}")
    }
}

impl FromStr for VerificationStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(Self::Waiting),
            "ready" => Ok(Self::Ready),
            "completed" => Ok(Self::Completed),
            _ => Err(AppError::validation(format!(
                "Invalid verification status: '{s}'. Expected one of: waiting, ready, completed"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use employnet_core::error::ErrorKind;

    #[test]
    fn happy_path_walks_forward() {
        let ready = VerificationStatus::Waiting
            .apply(VerificationAction::Approve)
            .unwrap();
        assert_eq!(ready, VerificationStatus::Ready);
        let done = ready.apply(VerificationAction::Complete).unwrap();
        assert_eq!(done, VerificationStatus::Completed);
        assert!(done.is_terminal());
    }

    #[test]
    fn waiting_cannot_be_completed_directly() {
        let err = VerificationStatus::Waiting
            .apply(VerificationAction::Complete)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn ready_cannot_be_approved_again() {
        assert!(
            VerificationStatus::Ready
                .apply(VerificationAction::Approve)
                .is_err()
        );
    }

    #[test]
    fn completed_is_frozen() {
        for action in [VerificationAction::Approve, VerificationAction::Complete] {
            assert!(VerificationStatus::Completed.apply(action).is_err());
        }
    }
}
