//! Thought handlers
//!
//! Endpoints for listing, creating and liking thoughts.

use axum::{
    extract::{Path, State},
    Json,
};
use thoughts_service::{CreateThoughtRequest, ThoughtResponse, ThoughtService};

use crate::extractors::{ThoughtIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the most recent thoughts
///
/// GET /thoughts
pub async fn list_thoughts(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ThoughtResponse>>> {
    let service = ThoughtService::new(state.service_context());
    let thoughts = service.list_recent().await?;
    Ok(Json(thoughts))
}

/// Create thought
///
/// POST /thoughts
pub async fn create_thought(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateThoughtRequest>,
) -> ApiResult<Created<Json<ThoughtResponse>>> {
    let service = ThoughtService::new(state.service_context());
    let response = service.create_thought(request).await?;
    Ok(Created(Json(response)))
}

/// Like thought
///
/// POST /thoughts/{id}/like
pub async fn like_thought(
    State(state): State<AppState>,
    Path(path): Path<ThoughtIdPath>,
) -> ApiResult<Json<ThoughtResponse>> {
    let thought_id = path.thought_id()?;

    let service = ThoughtService::new(state.service_context());
    let response = service.like_thought(thought_id).await?;
    Ok(Json(response))
}
