//! Request and response data transfer objects.

pub mod request;
pub mod response;

use validator::Validate;

use employnet_core::error::AppError;

/// Run `validator` rules on a request body, mapping failures to a
/// Validation error.
pub fn validate(req: &impl Validate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
