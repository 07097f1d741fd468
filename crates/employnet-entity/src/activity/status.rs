//! Activity status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of an activity.
///
/// A completed activity is never physically deleted; completion is a
/// one-way status change stamped with `completed_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "activity_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    /// Created by an admin but not yet visible to members.
    Draft,
    /// Visible and completable.
    Active,
    /// Completed; terminal.
    Completed,
    /// Failed externally (webhook reported an error).
    Error,
}

impl ActivityStatus {
    /// Whether a completion may be recorded from this status.
    pub fn is_completable(&self) -> bool {
        matches!(self, Self::Draft | Self::Active)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActivityStatus {
    type Err = employnet_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            "error" => Ok(Self::Error),
            _ => Err(employnet_core::AppError::validation(format!(
                "Invalid activity status: '{s}'. Expected one of: draft, active, completed, error"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_is_not_completable_again() {
        assert!(ActivityStatus::Active.is_completable());
        assert!(ActivityStatus::Draft.is_completable());
        assert!(!ActivityStatus::Completed.is_completable());
        assert!(!ActivityStatus::Error.is_completable());
    }
}
