//! Notification retention cleanup.

use std::sync::Arc;

use tracing::info;

use employnet_core::result::AppResult;
use employnet_database::repositories::notification::NotificationRepository;

/// Deletes read notifications older than the retention window.
#[derive(Debug)]
pub struct NotificationCleanupJob {
    notifications: Arc<NotificationRepository>,
    retention_days: i64,
}

impl NotificationCleanupJob {
    /// Create a new cleanup job.
    pub fn new(notifications: Arc<NotificationRepository>, retention_days: i64) -> Self {
        Self {
            notifications,
            retention_days,
        }
    }

    /// Run one cleanup pass.
    pub async fn run(&self) -> AppResult<u64> {
        let purged = self
            .notifications
            .purge_read_older_than(self.retention_days)
            .await?;
        info!(
            purged,
            retention_days = self.retention_days,
            "Notification cleanup finished"
        );
        Ok(purged)
    }
}
