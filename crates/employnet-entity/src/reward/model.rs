//! Reward entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A redemption record. Write-once; debits the balance at creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reward {
    /// Unique reward identifier.
    pub id: Uuid,
    /// The redeeming user.
    pub user_id: Uuid,
    /// Points spent.
    pub points: i64,
    /// What was redeemed.
    pub title: String,
    /// When the redemption happened.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a reward redemption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReward {
    /// The redeeming user.
    pub user_id: Uuid,
    /// Points spent.
    pub points: i64,
    /// What was redeemed.
    pub title: String,
}
