//! Response DTOs for API endpoints and broadcasts
//!
//! Views are sparse: `reactions` is absent when the target has none,
//! `viewerReaction` is absent when the viewer has none (or no viewer was
//! given), and `comments`/`replies` are absent when empty. The omission rule
//! lives entirely here, at the serialization boundary - the aggregation logic
//! never deals in serialized shapes. Ids serialize as strings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Author
// ============================================================================

/// Author view embedded in post and comment views
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// The author's role string, shown as a title by clients
    pub title: String,
    pub verified: bool,
}

// ============================================================================
// Comments
// ============================================================================

/// Annotated comment view (recursive through `replies`)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub post_id: String,
    /// Absent for top-level comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_comment_id: Option<String>,
    /// Sparse per-type counts; absent when the comment has no reactions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<BTreeMap<String, i64>>,
    /// Absent when the requesting viewer has no reaction (or none was given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_reaction: Option<String>,
    /// Direct replies ordered by creation time; absent when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub replies: Vec<CommentResponse>,
}

// ============================================================================
// Posts
// ============================================================================

/// Annotated post view
///
/// The post title is a write-model field and intentionally not projected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub author: AuthorResponse,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<BTreeMap<String, i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer_reaction: Option<String>,
    /// Full comment tree, top level ordered by creation time; absent when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Tags & Reaction Types
// ============================================================================

/// Tag listing entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResponse {
    pub id: String,
    pub name: String,
}

/// Reaction vocabulary entry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionTypeResponse {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
