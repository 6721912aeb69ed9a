//! Test fixtures and data generators
//!
//! Provides reusable request/response shapes for integration tests.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create user request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("test{suffix}@example.com"),
            name: format!("testuser{suffix}"),
            role: "USER".to_string(),
            avatar: None,
        }
    }
}

/// Author view response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
    pub title: String,
    pub verified: bool,
}

/// Create post request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author_id: String,
    pub title: String,
    pub content: String,
}

impl CreatePostRequest {
    pub fn for_author(author_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            author_id: author_id.to_string(),
            title: format!("Test post {suffix}"),
            content: format!("Content of test post {suffix}"),
        }
    }
}

/// Update post request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Projected post view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: String,
    pub reactions: Option<BTreeMap<String, i64>>,
    pub viewer_reaction: Option<String>,
    #[serde(default)]
    pub comments: Vec<CommentResponse>,
}

/// Create comment request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub author_id: String,
    pub post_id: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
}

/// Annotated comment view
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub content: String,
    pub created_at: String,
    pub post_id: String,
    pub parent_comment_id: Option<String>,
    pub reactions: Option<BTreeMap<String, i64>>,
    pub viewer_reaction: Option<String>,
    #[serde(default)]
    pub replies: Vec<CommentResponse>,
}

/// Reaction upsert request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    pub viewer_id: String,
    pub target_id: String,
    pub target_type: String,
    pub reaction_type_id: String,
}

/// Reaction vocabulary entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionTypeResponse {
    pub id: String,
    pub name: String,
}

/// Tag names request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagNamesRequest {
    pub names: Vec<String>,
}
