//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use employnet_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *who* is acting. The role here comes from the
/// local user row; operations with teeth (payout processing) re-check
/// the role against the identity provider at call time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's local row ID.
    pub user_id: Uuid,
    /// The identity provider's stable subject.
    pub subject: String,
    /// The user's role per the local user row.
    pub role: UserRole,
    /// Email address from the token claims.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, subject: String, role: UserRole, email: String) -> Self {
        Self {
            user_id,
            subject,
            role,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
