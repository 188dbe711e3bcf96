//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create thought request
#[derive(Debug, Serialize)]
pub struct CreateThoughtRequest {
    pub message: String,
}

impl CreateThoughtRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn unique() -> Self {
        Self::new(format!("Happy thought #{}", unique_suffix()))
    }
}

/// Thought response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtResponse {
    pub id: String,
    pub message: String,
    pub hearts: i64,
    pub created_at: DateTime<Utc>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Root endpoint response
#[derive(Debug, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub endpoints: Vec<EndpointResponse>,
}

/// One listed endpoint
#[derive(Debug, Deserialize)]
pub struct EndpointResponse {
    pub path: String,
    pub methods: Vec<String>,
}
