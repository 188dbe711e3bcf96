//! Thought entity <-> model mapper

use chrono::{DateTime, Utc};
use thoughts_core::{DomainError, Thought, ThoughtId, ThoughtMessage};
use uuid::Uuid;

use crate::models::ThoughtModel;

/// Convert ThoughtModel to Thought entity
///
/// Rows are re-validated so a hand-edited table cannot leak an invalid message.
impl TryFrom<ThoughtModel> for Thought {
    type Error = DomainError;

    fn try_from(model: ThoughtModel) -> Result<Self, Self::Error> {
        let message = ThoughtMessage::parse(model.message).map_err(|e| {
            DomainError::DatabaseError(format!("stored thought {} is invalid: {e}", model.id))
        })?;

        Ok(Thought {
            id: ThoughtId::from_uuid(model.id),
            message,
            hearts: model.hearts,
            created_at: model.created_at,
        })
    }
}

/// Convert Thought entity reference to values for database insertion
pub struct ThoughtInsert<'a> {
    pub id: Uuid,
    pub message: &'a str,
    pub hearts: i64,
    pub created_at: DateTime<Utc>,
}

impl<'a> ThoughtInsert<'a> {
    pub fn new(thought: &'a Thought) -> Self {
        Self {
            id: thought.id.into_inner(),
            message: thought.message.as_str(),
            hearts: thought.hearts,
            created_at: thought.created_at,
        }
    }
}
