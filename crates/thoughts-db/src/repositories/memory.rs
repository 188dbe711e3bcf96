//! In-memory implementation of ThoughtRepository
//!
//! Holds every thought behind a single mutex. Each trait method takes the lock
//! once, so `increment_hearts` is atomic exactly like the SQL `UPDATE`.

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use thoughts_core::{RepoResult, Thought, ThoughtId, ThoughtMessage, ThoughtRepository};

use super::error::thought_not_found;

/// Process-local thought store
#[derive(Debug, Default)]
pub struct MemoryThoughtRepository {
    // Insertion order; listing sorts a snapshot
    thoughts: Mutex<Vec<Thought>>,
}

impl MemoryThoughtRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with thoughts
    pub fn with_thoughts(thoughts: impl IntoIterator<Item = Thought>) -> Self {
        Self {
            thoughts: Mutex::new(thoughts.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ThoughtRepository for MemoryThoughtRepository {
    #[instrument(skip(self))]
    async fn create(&self, message: ThoughtMessage) -> RepoResult<Thought> {
        let thought = Thought::new(ThoughtId::generate(), message);
        self.thoughts.lock().push(thought.clone());
        Ok(thought)
    }

    #[instrument(skip(self))]
    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<Thought>> {
        let limit = usize::try_from(limit).unwrap_or(0);
        if limit == 0 {
            return Ok(Vec::new());
        }

        // Newest insertion first, then a stable sort keeps that order among equal timestamps
        let mut snapshot: Vec<Thought> = self.thoughts.lock().iter().rev().cloned().collect();
        snapshot.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        snapshot.truncate(limit);

        Ok(snapshot)
    }

    #[instrument(skip(self))]
    async fn increment_hearts(&self, id: ThoughtId) -> RepoResult<Thought> {
        let mut thoughts = self.thoughts.lock();
        let thought = thoughts
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| thought_not_found(id))?;

        thought.like();
        Ok(thought.clone())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ThoughtId) -> RepoResult<Option<Thought>> {
        Ok(self.thoughts.lock().iter().find(|t| t.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        Ok(self.thoughts.lock().len() as i64)
    }
}
