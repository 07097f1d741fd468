//! Admin-only handlers.
//!
//! Role checks live in the service layer; these handlers only shape the
//! HTTP surface. Payout processing additionally re-resolves the admin
//! role against the identity provider inside the service.

pub mod activities;
pub mod notifications;
pub mod payouts;
pub mod rewards;
pub mod stats;
pub mod users;
pub mod verifications;
