//! Payout domain entities.

pub mod model;
pub mod status;

pub use model::{CreatePayout, Payout};
pub use status::{PayoutAction, PayoutStatus};
