//! Background worker configuration.

use serde::{Deserialize, Serialize};

/// Background worker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// Whether the worker is enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Cron expression for the notification cleanup job.
    #[serde(default = "default_cleanup_schedule")]
    pub notification_cleanup_schedule: String,
    /// Days a read notification is retained before cleanup.
    #[serde(default = "default_retention_days")]
    pub notification_retention_days: i64,
    /// Cron expression for the ledger reconciliation audit.
    #[serde(default = "default_reconcile_schedule")]
    pub reconcile_schedule: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            notification_cleanup_schedule: default_cleanup_schedule(),
            notification_retention_days: default_retention_days(),
            reconcile_schedule: default_reconcile_schedule(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cleanup_schedule() -> String {
    // Hourly at minute 10
    "0 10 * * * *".to_string()
}

fn default_retention_days() -> i64 {
    30
}

fn default_reconcile_schedule() -> String {
    // Daily at 03:30
    "0 30 3 * * *".to_string()
}
