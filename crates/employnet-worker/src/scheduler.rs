//! Cron scheduler for periodic maintenance tasks.

use std::sync::Arc;

use tokio_cron_scheduler::{Job as CronJob, JobScheduler};
use tracing::{error, info};

use employnet_core::config::worker::WorkerConfig;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;

use crate::jobs::{LedgerReconcileJob, NotificationCleanupJob};

/// Cron-based scheduler for periodic background tasks.
pub struct CronScheduler {
    /// The underlying job scheduler.
    scheduler: JobScheduler,
}

impl std::fmt::Debug for CronScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CronScheduler").finish()
    }
}

impl CronScheduler {
    /// Create a new cron scheduler.
    pub async fn new() -> AppResult<Self> {
        let scheduler = JobScheduler::new()
            .await
            .map_err(|e| AppError::internal(format!("Failed to create scheduler: {e}")))?;
        Ok(Self { scheduler })
    }

    /// Register the maintenance tasks from configuration.
    pub async fn register_tasks(
        &self,
        config: &WorkerConfig,
        cleanup: Arc<NotificationCleanupJob>,
        reconcile: Arc<LedgerReconcileJob>,
    ) -> AppResult<()> {
        self.register_notification_cleanup(&config.notification_cleanup_schedule, cleanup)
            .await?;
        self.register_ledger_reconcile(&config.reconcile_schedule, reconcile)
            .await?;
        info!("All scheduled tasks registered");
        Ok(())
    }

    /// Start the scheduler.
    pub async fn start(&self) -> AppResult<()> {
        self.scheduler
            .start()
            .await
            .map_err(|e| AppError::internal(format!("Failed to start scheduler: {e}")))?;
        info!("Cron scheduler started");
        Ok(())
    }

    /// Shut down the scheduler.
    pub async fn shutdown(&mut self) -> AppResult<()> {
        self.scheduler
            .shutdown()
            .await
            .map_err(|e| AppError::internal(format!("Failed to shutdown scheduler: {e}")))?;
        info!("Cron scheduler shut down");
        Ok(())
    }

    async fn register_notification_cleanup(
        &self,
        schedule: &str,
        job: Arc<NotificationCleanupJob>,
    ) -> AppResult<()> {
        let cron_job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                if let Err(e) = job.run().await {
                    error!(error = %e, "Notification cleanup failed");
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create notification_cleanup schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add notification_cleanup schedule: {e}"))
        })?;

        info!(schedule, "Registered: notification_cleanup");
        Ok(())
    }

    async fn register_ledger_reconcile(
        &self,
        schedule: &str,
        job: Arc<LedgerReconcileJob>,
    ) -> AppResult<()> {
        let cron_job = CronJob::new_async(schedule, move |_uuid, _lock| {
            let job = Arc::clone(&job);
            Box::pin(async move {
                if let Err(e) = job.run().await {
                    error!(error = %e, "Ledger reconciliation failed");
                }
            })
        })
        .map_err(|e| {
            AppError::internal(format!("Failed to create ledger_reconcile schedule: {e}"))
        })?;

        self.scheduler.add(cron_job).await.map_err(|e| {
            AppError::internal(format!("Failed to add ledger_reconcile schedule: {e}"))
        })?;

        info!(schedule, "Registered: ledger_reconcile");
        Ok(())
    }
}
