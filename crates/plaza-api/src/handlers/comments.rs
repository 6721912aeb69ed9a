//! Comment handlers
//!
//! Endpoints for comment trees, on-demand reply loading, and comment CRUD.

use axum::{
    extract::{Path, State},
    Json,
};
use plaza_service::services::CommentService;
use plaza_service::{CommentResponse, CreateCommentRequest};

use crate::extractors::{CommentIdPath, PostIdPath, ValidatedJson, Viewer};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Full annotated comment tree of a post
///
/// GET /posts/{post_id}/comments
pub async fn get_post_comments(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<PostIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.comments_for_post(path.post_id()?, viewer).await?;
    Ok(Json(comments))
}

/// One comment with its reply subtree
///
/// GET /comments/{comment_id}
pub async fn get_comment(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.get_comment(path.comment_id()?, viewer).await?;
    Ok(Json(comment))
}

/// Direct replies of a comment, for on-demand loading
///
/// GET /comments/{comment_id}/replies
pub async fn get_comment_replies(
    State(state): State<AppState>,
    Viewer(viewer): Viewer,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let replies = service
        .replies_for_comment(path.comment_id()?, viewer)
        .await?;
    Ok(Json(replies))
}

/// Create a comment or reply
///
/// POST /comments
pub async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .create_comment(
            request.author_id,
            request.post_id,
            request.content,
            request.parent_comment_id,
        )
        .await?;
    Ok(Created(Json(comment)))
}

/// Delete a comment and its reply subtree
///
/// DELETE /comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(path): Path<CommentIdPath>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(path.comment_id()?).await?;
    Ok(NoContent)
}
