//! Entity to DTO mappers
//!
//! Converts domain entities into response DTOs.

use thoughts_core::Thought;

use super::responses::ThoughtResponse;

impl From<Thought> for ThoughtResponse {
    fn from(thought: Thought) -> Self {
        Self {
            id: thought.id,
            message: thought.message.into_inner(),
            hearts: thought.hearts,
            created_at: thought.created_at,
        }
    }
}
