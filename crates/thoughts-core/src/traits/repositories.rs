//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::Thought;
use crate::error::DomainError;
use crate::value_objects::{ThoughtId, ThoughtMessage};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Number of thoughts returned by the listing endpoint
pub const RECENT_THOUGHTS_LIMIT: i64 = 20;

// ============================================================================
// Thought Repository
// ============================================================================

#[async_trait]
pub trait ThoughtRepository: Send + Sync {
    /// Store a new thought with zero hearts and the current time.
    ///
    /// The store assigns the ID and returns the record as persisted.
    async fn create(&self, message: ThoughtMessage) -> RepoResult<Thought>;

    /// List at most `limit` thoughts, newest first
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Thought>>;

    /// Atomically add one heart and return the updated thought.
    ///
    /// Returns `DomainError::ThoughtNotFound` when no thought has this ID.
    async fn increment_hearts(&self, id: ThoughtId) -> RepoResult<Thought>;

    /// Find thought by ID
    async fn find_by_id(&self, id: ThoughtId) -> RepoResult<Option<Thought>>;

    /// Total number of stored thoughts
    async fn count(&self) -> RepoResult<i64>;
}
