//! Activity catalog management.

pub mod service;

pub use service::ActivityService;
