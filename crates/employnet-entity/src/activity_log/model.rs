//! Activity log entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Append-only record of a completion event.
///
/// Rows are write-once: no update or delete path exists. Together with
/// rewards and payouts, these records corroborate every balance change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActivityLog {
    /// Unique log identifier.
    pub id: Uuid,
    /// The user credited.
    pub user_id: Uuid,
    /// The completed activity.
    pub activity_id: Uuid,
    /// Points credited by this completion.
    pub points: i64,
    /// The activity type at completion time (for display/filtering).
    pub log_type: String,
    /// Integration metadata captured at completion time.
    pub metadata: Option<serde_json::Value>,
    /// When the completion was recorded.
    pub created_at: DateTime<Utc>,
}

/// Data for appending a new log row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityLog {
    /// The user credited.
    pub user_id: Uuid,
    /// The completed activity.
    pub activity_id: Uuid,
    /// Points credited.
    pub points: i64,
    /// The activity type at completion time.
    pub log_type: String,
    /// Integration metadata.
    pub metadata: Option<serde_json::Value>,
}
