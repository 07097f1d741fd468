//! Notification audience enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a notification is addressed to.
///
/// Member notifications carry a concrete `user_id`; admin notifications
/// are broadcast to whoever holds the admin role and use the
/// `admin_*` event-type prefix convention for dashboard filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_audience", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationAudience {
    /// The admin dashboard.
    Admin,
    /// A single member.
    Member,
}

impl NotificationAudience {
    /// Return the audience as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for NotificationAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
