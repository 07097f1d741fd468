//! # employnet-worker
//!
//! Cron-scheduled maintenance for Employ-Net: purging read notifications
//! past their retention window and auditing the points ledger against
//! its corroborating records.

pub mod jobs;
pub mod scheduler;

pub use scheduler::CronScheduler;
