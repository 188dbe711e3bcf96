//! Service layer error types

use std::fmt;
use thoughts_core::DomainError;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation or store failure
    Domain(DomainError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
        }
    }
}

impl ServiceError {
    /// Get the HTTP status code for this error
    ///
    /// Store failures are reported as 400 along with validation failures.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(DomainError::ThoughtNotFound(_)) => 404,
            Self::Domain(DomainError::MessageLength { .. } | DomainError::DatabaseError(_)) => 400,
        }
    }

    /// Get the error code for logs
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
