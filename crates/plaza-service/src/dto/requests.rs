//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ids arrive as strings or numbers (Snowflake deserialization accepts both).

use serde::Deserialize;
use validator::Validate;

use plaza_core::value_objects::{Snowflake, TargetKind};

// ============================================================================
// User Requests
// ============================================================================

/// Create user request. Accounts are open: no credentials are involved.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "Role must be 1-50 characters"))]
    pub role: String,

    #[serde(default)]
    pub avatar: Option<String>,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub author_id: Snowflake,

    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

/// Update post request (author is immutable and not accepted here)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub author_id: Snowflake,

    pub post_id: Snowflake,

    #[validate(length(min = 1, max = 4000, message = "Content must be 1-4000 characters"))]
    pub content: String,

    /// Present when replying to another comment of the same post
    #[serde(default)]
    pub parent_comment_id: Option<Snowflake>,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Create/replace reaction request (one reaction per viewer per target)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReactionRequest {
    pub viewer_id: Snowflake,
    pub target_id: Snowflake,
    pub target_type: TargetKind,
    pub reaction_type_id: Snowflake,
}

// ============================================================================
// Tag Requests
// ============================================================================

/// Tag names to add to / replace on / remove from a post
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TagNamesRequest {
    #[validate(length(min = 1, message = "At least one tag name is required"))]
    pub names: Vec<String>,
}
