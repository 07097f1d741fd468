//! Activity entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::ActivityType;
use super::status::ActivityStatus;

/// A completable unit of work carrying a point reward.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: Uuid,
    /// Title shown to members.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// The kind of task.
    pub activity_type: ActivityType,
    /// Points credited on completion.
    pub points: i64,
    /// Lifecycle status.
    pub status: ActivityStatus,
    /// When the activity was completed (if it was).
    pub completed_at: Option<DateTime<Utc>>,
    /// The user this instance is assigned to (None for catalog templates).
    pub user_id: Option<Uuid>,
    /// The admin who created it.
    pub created_by: Option<Uuid>,
    /// Integration metadata (video asset id, survey form id, ...).
    pub metadata: Option<serde_json::Value>,
    /// When the activity was created.
    pub created_at: DateTime<Utc>,
    /// When the activity was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// Whether this activity can still be completed.
    pub fn is_completable(&self) -> bool {
        self.status.is_completable()
    }
}

/// Data required to create a new activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivity {
    /// Title shown to members.
    pub title: String,
    /// Longer description.
    pub description: Option<String>,
    /// The kind of task.
    pub activity_type: ActivityType,
    /// Points credited on completion.
    pub points: i64,
    /// Initial status (`draft` or `active`).
    pub status: ActivityStatus,
    /// Assigned user, if instantiated per-member.
    pub user_id: Option<Uuid>,
    /// Creating admin.
    pub created_by: Option<Uuid>,
    /// Integration metadata.
    pub metadata: Option<serde_json::Value>,
}
