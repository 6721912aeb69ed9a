//! Post handlers
//!
//! Endpoints for post CRUD and listings. Read endpoints accept an optional
//! `viewer_id` query parameter that personalizes the viewer-reaction fields.

use axum::{
    extract::{Path, State},
    Json,
};
use plaza_service::{CreatePostRequest, PostResponse, UpdatePostRequest};
use plaza_service::services::PostService;

use crate::extractors::{Pagination, PostIdPath, TagNamePath, UserIdPath, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List posts
///
/// GET /posts
pub async fn list_posts(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    pagination: Pagination,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts(pagination.into(), viewer).await?;
    Ok(Json(posts))
}

/// Get one post
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service.get_post(path.post_id()?, viewer).await?;
    Ok(Json(post))
}

/// List posts by author
///
/// GET /posts/by-author/{user_id}
pub async fn get_posts_by_author(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<UserIdPath>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts_by_author(path.user_id()?, viewer).await?;
    Ok(Json(posts))
}

/// List posts by tag name
///
/// GET /posts/by-tag/{name}
pub async fn get_posts_by_tag(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<TagNamePath>,
) -> ApiResult<Json<Vec<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts_by_tag(path.name(), viewer).await?;
    Ok(Json(posts))
}

/// Create a post
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostResponse>>> {
    let service = PostService::new(state.service_context());
    let post = service
        .create_post(request.author_id, request.title, request.content)
        .await?;
    Ok(Created(Json(post)))
}

/// Update a post's title and content
///
/// PUT /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> ApiResult<Json<PostResponse>> {
    let service = PostService::new(state.service_context());
    let post = service
        .update_post(path.post_id()?, request.title, request.content, viewer)
        .await?;
    Ok(Json(post))
}

/// Delete a post (comments and reactions go with it)
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<NoContent> {
    let service = PostService::new(state.service_context());
    service.delete_post(path.post_id()?).await?;
    Ok(NoContent)
}
