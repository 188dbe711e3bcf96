//! Root endpoint

use axum::{Extension, Json};
use thoughts_service::IndexResponse;

use crate::routes::Endpoints;

/// List every registered endpoint
///
/// GET /
pub async fn list_endpoints(Extension(endpoints): Extension<Endpoints>) -> Json<IndexResponse> {
    Json(IndexResponse::new(endpoints.as_ref().clone()))
}
