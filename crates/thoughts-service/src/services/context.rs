//! Service context - dependency container for services
//!
//! Holds the thought store handle shared by every request.

use std::sync::Arc;

use thoughts_core::ThoughtRepository;
use thoughts_db::{MemoryThoughtRepository, PgPool, PgThoughtRepository};

/// Service context containing all dependencies
///
/// The store is injected here rather than reached through a global, so the
/// same services run against PostgreSQL in production and an in-memory
/// store in tests.
#[derive(Clone)]
pub struct ServiceContext {
    thought_repo: Arc<dyn ThoughtRepository>,
}

impl ServiceContext {
    /// Create a new service context around a thought store
    pub fn new(thought_repo: Arc<dyn ThoughtRepository>) -> Self {
        Self { thought_repo }
    }

    /// Service context backed by PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(Arc::new(PgThoughtRepository::new(pool)))
    }

    /// Service context backed by an empty in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryThoughtRepository::new()))
    }

    /// Get the thought repository
    pub fn thought_repo(&self) -> &dyn ThoughtRepository {
        self.thought_repo.as_ref()
    }
}
