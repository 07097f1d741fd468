//! Bank account domain entities.

pub mod model;

pub use model::{BankAccount, UpsertBankAccount};
