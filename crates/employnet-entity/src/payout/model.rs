//! Payout entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PayoutStatus;

/// A withdrawal request converting points to a currency transfer.
///
/// Amounts are integer cents. At the system-wide rate of 100 points per
/// dollar, the points debited for a payout equal its cent amount, and a
/// rejection refunds exactly that many points.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payout {
    /// Unique payout identifier.
    pub id: Uuid,
    /// The requesting user.
    pub user_id: Uuid,
    /// Requested amount in cents.
    pub amount_cents: i64,
    /// Lifecycle status.
    pub status: PayoutStatus,
    /// Admin notes attached while processing.
    pub notes: Option<String>,
    /// The admin who last processed this payout.
    pub processed_by: Option<Uuid>,
    /// When the payout was last processed.
    pub processed_at: Option<DateTime<Utc>>,
    /// When the payout was requested.
    pub created_at: DateTime<Utc>,
}

impl Payout {
    /// Points debited when the payout was requested.
    pub fn points_debited(&self) -> i64 {
        employnet_core::points::points_for_cents(self.amount_cents)
    }
}

/// Data for creating a payout request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayout {
    /// The requesting user.
    pub user_id: Uuid,
    /// Requested amount in cents.
    pub amount_cents: i64,
}
