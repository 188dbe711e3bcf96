//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use thoughts_core::{DomainError, ThoughtId};

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "thought not found" error
pub fn thought_not_found(id: ThoughtId) -> DomainError {
    DomainError::ThoughtNotFound(id)
}
