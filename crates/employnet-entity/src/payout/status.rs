//! Payout status enumeration and admin action transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use employnet_core::AppError;

/// Lifecycle status of a payout request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payout_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    /// Requested by the member, points already debited.
    Pending,
    /// An admin started processing the transfer.
    OnTheWay,
    /// Transfer confirmed; terminal.
    Completed,
    /// Rejected by an admin, points refunded; terminal.
    Rejected,
}

/// Admin actions that drive a payout through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayoutAction {
    /// Begin the transfer (`pending -> on_the_way`).
    Process,
    /// Confirm the transfer landed (`-> completed`).
    Complete,
    /// Reject and refund the debited points (`-> rejected`).
    Reject,
}

impl PayoutStatus {
    /// Whether this status accepts no further actions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Rejected)
    }

    /// Apply an admin action, returning the resulting status.
    ///
    /// Terminal states are frozen: `complete` and `reject` are only
    /// accepted from `pending` or `on_the_way`, and `process` only from
    /// `pending`. Every other pair is a Conflict with no state change.
    pub fn apply(&self, action: PayoutAction) -> Result<PayoutStatus, AppError> {
        match (self, action) {
            (Self::Pending, PayoutAction::Process) => Ok(Self::OnTheWay),
            (Self::Pending | Self::OnTheWay, PayoutAction::Complete) => Ok(Self::Completed),
            (Self::Pending | Self::OnTheWay, PayoutAction::Reject) => Ok(Self::Rejected),
            (current, action) => Err(AppError::conflict(format!(
                "Cannot {action} a payout in status '{current}'"
            ))),
        }
    }

    /// Return the status as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::OnTheWay => "on_the_way",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for PayoutStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PayoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Process => "process",
            Self::Complete => "complete",
            Self::Reject => "reject",
        };
        write!(f, "{s}")
    }
}

impl FromStr for PayoutAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "process" => Ok(Self::Process),
            "complete" => Ok(Self::Complete),
            "reject" => Ok(Self::Reject),
            _ => Err(AppError::validation(format!(
                "Invalid payout action: '{s}'. Expected one of: process, complete, reject"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_take_every_action() {
        assert_eq!(
            PayoutStatus::Pending.apply(PayoutAction::Process).unwrap(),
            PayoutStatus::OnTheWay
        );
        assert_eq!(
            PayoutStatus::Pending.apply(PayoutAction::Complete).unwrap(),
            PayoutStatus::Completed
        );
        assert_eq!(
            PayoutStatus::Pending.apply(PayoutAction::Reject).unwrap(),
            PayoutStatus::Rejected
        );
    }

    #[test]
    fn on_the_way_cannot_be_processed_twice() {
        assert!(PayoutStatus::OnTheWay.apply(PayoutAction::Process).is_err());
        assert_eq!(
            PayoutStatus::OnTheWay.apply(PayoutAction::Complete).unwrap(),
            PayoutStatus::Completed
        );
        assert_eq!(
            PayoutStatus::OnTheWay.apply(PayoutAction::Reject).unwrap(),
            PayoutStatus::Rejected
        );
    }

    #[test]
    fn terminal_states_are_frozen() {
        for status in [PayoutStatus::Completed, PayoutStatus::Rejected] {
            for action in [
                PayoutAction::Process,
                PayoutAction::Complete,
                PayoutAction::Reject,
            ] {
                let err = status.apply(action).unwrap_err();
                assert_eq!(err.kind, employnet_core::error::ErrorKind::Conflict);
            }
        }
    }
}
