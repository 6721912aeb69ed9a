//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{Snowflake, TargetKind};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Reaction type not found: {0}")]
    ReactionTypeNotFound(Snowflake),

    #[error("No reaction by user {user_id} on {target_kind} {target_id}")]
    ReactionNotFound {
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Parent comment {parent_id} does not belong to post {post_id}")]
    ParentOutsidePost {
        parent_id: Snowflake,
        post_id: Snowflake,
    },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Reaction already exists for user {user_id} on {target_kind} {target_id}")]
    DuplicateReaction {
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    },

    #[error("Tag name already in use: {0}")]
    TagAlreadyExists(String),

    #[error("User email or name already in use")]
    UserAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Publish error: {0}")]
    PublishError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::TagNotFound(_) => "UNKNOWN_TAG",
            Self::ReactionTypeNotFound(_) => "UNKNOWN_REACTION_TYPE",
            Self::ReactionNotFound { .. } => "UNKNOWN_REACTION",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::ParentOutsidePost { .. } => "PARENT_OUTSIDE_POST",

            // Conflict
            Self::DuplicateReaction { .. } => "REACTION_ALREADY_EXISTS",
            Self::TagAlreadyExists(_) => "TAG_ALREADY_EXISTS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::PublishError(_) => "PUBLISH_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PostNotFound(_)
                | Self::CommentNotFound(_)
                | Self::TagNotFound(_)
                | Self::ReactionTypeNotFound(_)
                | Self::ReactionNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::ContentTooLong { .. } | Self::ParentOutsidePost { .. }
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::DuplicateReaction { .. } | Self::TagAlreadyExists(_) | Self::UserAlreadyExists
        )
    }
}
