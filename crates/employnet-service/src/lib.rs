//! # employnet-service
//!
//! Business logic for Employ-Net. Services orchestrate repositories,
//! the cache, email, and real-time fan-out. All balance changes run in
//! a single database transaction paired with a corroborating record
//! (activity log, reward, or payout); side effects (cache invalidation,
//! notifications, events) happen only after the transaction commits.

pub mod activity;
pub mod bank_account;
pub mod context;
pub mod email;
pub mod ledger;
pub mod notification;
pub mod stats;
pub mod user;
pub mod verification;

pub use context::RequestContext;
