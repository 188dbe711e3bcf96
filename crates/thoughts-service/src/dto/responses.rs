//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thoughts_core::ThoughtId;

/// Greeting returned by the root endpoint
pub const WELCOME_MESSAGE: &str =
    "Welcome to the Happy Thoughts API! Below are the available endpoints";

// ============================================================================
// Thought Responses
// ============================================================================

/// Thought as seen by API clients
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtResponse {
    pub id: ThoughtId,
    pub message: String,
    pub hearts: i64,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Index Responses
// ============================================================================

/// Root endpoint body
#[derive(Debug, Clone, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub endpoints: Vec<EndpointResponse>,
}

impl IndexResponse {
    pub fn new(endpoints: Vec<EndpointResponse>) -> Self {
        Self {
            message: WELCOME_MESSAGE,
            endpoints,
        }
    }
}

/// One registered path and the methods it answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointResponse {
    pub path: String,
    pub methods: Vec<String>,
}

impl EndpointResponse {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
        }
    }
}
