//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audience::NotificationAudience;

/// A notification to be delivered to a user or the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient user (None for admin-audience broadcasts).
    pub user_id: Option<Uuid>,
    /// Audience scoping.
    pub audience: NotificationAudience,
    /// Event type that triggered this notification (drives UI styling;
    /// admin-facing types carry the `admin_` prefix).
    pub event_type: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub message: String,
    /// Whether the recipient has read this notification.
    pub is_read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.is_read
    }
}

/// Data for creating a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient user (None for admin-audience broadcasts).
    pub user_id: Option<Uuid>,
    /// Audience scoping.
    pub audience: NotificationAudience,
    /// Event type.
    pub event_type: String,
    /// Title.
    pub title: String,
    /// Body text.
    pub message: String,
}

impl CreateNotification {
    /// Build a member-facing notification.
    pub fn for_member(
        user_id: Uuid,
        event_type: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id),
            audience: NotificationAudience::Member,
            event_type: event_type.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    /// Build an admin-audience notification. The event type gets the
    /// `admin_` prefix if the caller did not already include it.
    pub fn for_admins(
        event_type: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let event_type = event_type.into();
        let event_type = if event_type.starts_with("admin_") {
            event_type
        } else {
            format!("admin_{event_type}")
        };
        Self {
            user_id: None,
            audience: NotificationAudience::Admin,
            event_type,
            title: title.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_notifications_get_prefixed_event_type() {
        let n = CreateNotification::for_admins("payout_requested", "Payout", "...");
        assert_eq!(n.event_type, "admin_payout_requested");
        assert_eq!(n.audience, NotificationAudience::Admin);
        assert!(n.user_id.is_none());

        let already = CreateNotification::for_admins("admin_payout_requested", "Payout", "...");
        assert_eq!(already.event_type, "admin_payout_requested");
    }
}
