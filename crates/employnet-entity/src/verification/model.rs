//! Verification request entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::VerificationStatus;

/// A per-user workflow gating access to an identity-verification activity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VerificationRequest {
    /// Unique request identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// The verification activity this request is for.
    pub activity_id: Uuid,
    /// Workflow status.
    pub status: VerificationStatus,
    /// Verification session URL attached by the admin on approval.
    pub verification_url: Option<String>,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
    /// When the request was last updated.
    pub updated_at: DateTime<Utc>,
    /// When the request completed.
    pub completed_at: Option<DateTime<Utc>>,
}

/// Data for creating a verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVerificationRequest {
    /// The requesting user.
    pub user_id: Uuid,
    /// The verification activity.
    pub activity_id: Uuid,
}
