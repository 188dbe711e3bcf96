//! Path parameter extractors
//!
//! Type-safe extraction of thought ids from path parameters.

use thoughts_core::ThoughtId;

use crate::response::ApiError;

/// Path parameters with a thought id
#[derive(Debug, serde::Deserialize)]
pub struct ThoughtIdPath {
    pub id: String,
}

impl ThoughtIdPath {
    /// Parse id as a ThoughtId
    pub fn thought_id(&self) -> Result<ThoughtId, ApiError> {
        ThoughtId::parse(&self.id).map_err(|e| ApiError::invalid_path(e.to_string()))
    }
}
