//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ThoughtId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// No thought has the requested id
    #[error("Thought not found")]
    ThoughtNotFound(ThoughtId),

    /// Message length outside the accepted range
    #[error("Message must be between {min} and {max} characters, got {actual}")]
    MessageLength { min: usize, max: usize, actual: usize },

    /// The store rejected or failed the operation
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs
    pub fn code(&self) -> &'static str {
        match self {
            Self::ThoughtNotFound(_) => "UNKNOWN_THOUGHT",
            Self::MessageLength { .. } => "INVALID_MESSAGE_LENGTH",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ThoughtNotFound(_))
    }
}
