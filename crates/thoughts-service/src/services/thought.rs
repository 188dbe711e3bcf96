//! Thought service
//!
//! Handles thought creation, listing, and likes. Each operation is a single
//! store call.

use thoughts_core::{ThoughtId, ThoughtMessage, RECENT_THOUGHTS_LIMIT};
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreateThoughtRequest, ThoughtResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Thought service
pub struct ThoughtService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThoughtService<'a> {
    /// Create a new ThoughtService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the most recent thoughts, newest first
    #[instrument(skip(self))]
    pub async fn list_recent(&self) -> ServiceResult<Vec<ThoughtResponse>> {
        let thoughts = self
            .ctx
            .thought_repo()
            .list_recent(RECENT_THOUGHTS_LIMIT)
            .await?;

        Ok(thoughts.into_iter().map(ThoughtResponse::from).collect())
    }

    /// Create a thought
    #[instrument(skip(self, request))]
    pub async fn create_thought(
        &self,
        request: CreateThoughtRequest,
    ) -> ServiceResult<ThoughtResponse> {
        debug!(message = %request.message, "Create thought request");

        let message = ThoughtMessage::parse(request.message)?;
        let thought = self.ctx.thought_repo().create(message).await?;

        info!(thought_id = %thought.id, "Thought created");

        Ok(ThoughtResponse::from(thought))
    }

    /// Add one heart to a thought
    #[instrument(skip(self))]
    pub async fn like_thought(&self, thought_id: ThoughtId) -> ServiceResult<ThoughtResponse> {
        let thought = self
            .ctx
            .thought_repo()
            .increment_hearts(thought_id)
            .await
            .inspect_err(|e| {
                if e.is_not_found() {
                    warn!(thought_id = %thought_id, "Like for unknown thought");
                }
            })?;

        info!(
            thought_id = %thought.id,
            message = %thought.message,
            hearts = thought.hearts,
            "Thought liked"
        );

        Ok(ThoughtResponse::from(thought))
    }
}
