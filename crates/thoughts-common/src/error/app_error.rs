//! Application error types
//!
//! Errors raised while bootstrapping and running the server process.
//! Per-request failures are handled by the API layer instead.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Database errors (connection, schema)
    #[error("Database error: {0}")]
    Database(String),

    // Listener errors
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Io(_) => "SERVER_ERROR",
        }
    }

    /// Create a database error from any displayable cause
    pub fn database(err: impl std::fmt::Display) -> Self {
        Self::Database(err.to_string())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
