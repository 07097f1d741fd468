//! Convenience result type alias for Employ-Net.

use crate::error::AppError;

/// A specialized `Result` type for Employ-Net operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
