//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

/// Create thought request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateThoughtRequest {
    #[validate(length(min = 5, max = 140, message = "Message must be 5-140 characters"))]
    pub message: String,
}
