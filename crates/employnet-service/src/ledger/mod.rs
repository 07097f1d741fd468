//! The points ledger: activity completion, reward redemption, and the
//! payout lifecycle. Every balance change commits atomically with its
//! corroborating record.

pub mod payout;
pub mod service;

pub use payout::PayoutService;
pub use service::LedgerService;
