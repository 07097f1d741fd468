//! HTTP request handlers, organized by domain.

pub mod activity;
pub mod admin;
pub mod bank_account;
pub mod health;
pub mod notification;
pub mod payout;
pub mod reward;
pub mod user;
pub mod verification;
pub mod webhook;
