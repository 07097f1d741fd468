//! # employnet-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Employ-Net entities.
//!
//! Repositories expose two flavors of mutating methods where the ledger
//! needs them: pool-bound methods for standalone writes, and `*_tx`
//! methods taking an executor so the service layer can group a balance
//! change with its corroborating record in one transaction.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
