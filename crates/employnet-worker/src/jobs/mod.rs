//! Scheduled job implementations.

pub mod cleanup;
pub mod reconcile;

pub use cleanup::NotificationCleanupJob;
pub use reconcile::LedgerReconcileJob;
