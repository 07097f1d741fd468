//! Concrete repository implementations, one per entity.

pub mod activity;
pub mod activity_log;
pub mod bank_account;
pub mod notification;
pub mod payout;
pub mod reward;
pub mod user;
pub mod verification;
