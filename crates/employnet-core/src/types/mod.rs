//! Shared plain types.

pub mod pagination;

pub use pagination::{PageRequest, PageResponse};
