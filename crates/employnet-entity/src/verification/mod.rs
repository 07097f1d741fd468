//! Verification request domain entities.

pub mod model;
pub mod status;

pub use model::{CreateVerificationRequest, VerificationRequest};
pub use status::{VerificationAction, VerificationStatus};
