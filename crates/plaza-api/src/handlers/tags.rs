//! Tag handlers
//!
//! Endpoints for the tag vocabulary and post/tag associations.

use axum::{
    extract::{Path, State},
    Json,
};
use plaza_service::services::TagService;
use plaza_service::{TagNamesRequest, TagResponse};

use crate::extractors::{PostIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all tags
///
/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<TagResponse>>> {
    let service = TagService::new(state.service_context());
    let tags = service.list_tags().await?;
    Ok(Json(tags))
}

/// Add tags to a post (unknown names are created)
///
/// POST /posts/{post_id}/tags
pub async fn add_post_tags(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<TagNamesRequest>,
) -> ApiResult<Json<Vec<String>>> {
    let service = TagService::new(state.service_context());
    let names = service
        .add_tags_to_post(path.post_id()?, &request.names)
        .await?;
    Ok(Json(names))
}

/// Replace every tag of a post
///
/// PUT /posts/{post_id}/tags
pub async fn replace_post_tags(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<TagNamesRequest>,
) -> ApiResult<Json<Vec<String>>> {
    let service = TagService::new(state.service_context());
    let names = service
        .replace_post_tags(path.post_id()?, &request.names)
        .await?;
    Ok(Json(names))
}

/// Detach tags from a post (unknown names are skipped)
///
/// DELETE /posts/{post_id}/tags
pub async fn remove_post_tags(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<TagNamesRequest>,
) -> ApiResult<Json<Vec<String>>> {
    let service = TagService::new(state.service_context());
    let names = service
        .remove_tags_from_post(path.post_id()?, &request.names)
        .await?;
    Ok(Json(names))
}
