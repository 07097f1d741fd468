//! Payout destination management.

pub mod service;

pub use service::BankAccountService;
