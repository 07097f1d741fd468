//! # employnet-core
//!
//! Core crate for Employ-Net. Contains traits, configuration schemas,
//! domain events, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Employ-Net crates.

pub mod config;
pub mod error;
pub mod events;
pub mod points;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
