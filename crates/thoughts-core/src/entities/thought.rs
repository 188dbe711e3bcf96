//! Thought entity - a short message with a like counter

use chrono::{DateTime, Utc};

use crate::value_objects::{ThoughtId, ThoughtMessage};

/// Thought entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thought {
    pub id: ThoughtId,
    pub message: ThoughtMessage,
    pub hearts: i64,
    pub created_at: DateTime<Utc>,
}

impl Thought {
    /// Create a new Thought with no hearts, stamped with the current time
    pub fn new(id: ThoughtId, message: ThoughtMessage) -> Self {
        Self {
            id,
            message,
            hearts: 0,
            created_at: Utc::now(),
        }
    }

    /// Add one heart
    #[inline]
    pub fn like(&mut self) {
        self.hearts = self.hearts.saturating_add(1);
    }
}
