//! # employnet-entity
//!
//! Domain entity models for Employ-Net. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod activity;
pub mod activity_log;
pub mod bank_account;
pub mod notification;
pub mod payout;
pub mod reward;
pub mod user;
pub mod verification;
