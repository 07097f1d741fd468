//! Identity verification workflow.

pub mod service;

pub use service::VerificationService;
