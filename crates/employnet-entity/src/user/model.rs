//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user in the Employ-Net system.
///
/// Invariant: `points_balance` never goes negative after a committed
/// operation. The balance is mutated only through the ledger service,
/// always paired with an append-only corroborating record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// The identity provider's user ID (stable external subject).
    pub subject: String,
    /// Email address.
    pub email: String,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// User role.
    pub role: UserRole,
    /// Current points balance (100 points = $1).
    pub points_balance: i64,
    /// Identity verification step: 0 = unverified, 1 = verified.
    pub verification_step: i32,
    /// Whether the account is active (deactivated on provider deletion).
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if the user has completed identity verification.
    pub fn is_verified(&self) -> bool {
        self.verification_step >= 1
    }

    /// Check whether the balance can cover a debit of `points`.
    pub fn can_afford(&self, points: i64) -> bool {
        self.points_balance >= points
    }
}

/// Data required to create a new user (from an identity-provider event).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Identity provider subject.
    pub subject: String,
    /// Email address.
    pub email: String,
    /// Display name (optional).
    pub display_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(balance: i64) -> User {
        User {
            id: Uuid::new_v4(),
            subject: "usr_123".to_string(),
            email: "member@example.com".to_string(),
            display_name: None,
            role: UserRole::Member,
            points_balance: balance,
            verification_step: 0,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn affordability_is_inclusive() {
        let user = sample_user(700);
        assert!(user.can_afford(700));
        assert!(!user.can_afford(701));
    }
}
