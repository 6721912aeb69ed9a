//! Entity to DTO mappers
//!
//! Conversions map only the direct entity fields; reaction summaries, viewer
//! reactions, and nested children are attached by the services.

use plaza_core::entities::{Comment, Post, ReactionType, Tag, User};

use super::responses::{
    AuthorResponse, CommentResponse, PostResponse, ReactionTypeResponse, TagResponse,
};

// ============================================================================
// Author Mappers
// ============================================================================

impl From<&User> for AuthorResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            title: user.role.clone(),
            verified: user.verified,
        }
    }
}

impl From<User> for AuthorResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Comment Mappers
// ============================================================================

impl CommentResponse {
    /// Map a comment's direct fields; annotations start absent/empty
    pub fn from_entity(comment: &Comment, author: AuthorResponse) -> Self {
        Self {
            id: comment.id.to_string(),
            author,
            content: comment.content.clone(),
            created_at: comment.created_at,
            post_id: comment.post_id.to_string(),
            parent_comment_id: comment.parent_id.map(|id| id.to_string()),
            reactions: None,
            viewer_reaction: None,
            replies: Vec::new(),
        }
    }
}

// ============================================================================
// Post Mappers
// ============================================================================

impl PostResponse {
    /// Map a post's direct fields; annotations start absent/empty
    pub fn from_entity(post: &Post, author: AuthorResponse, tags: Vec<String>) -> Self {
        Self {
            id: post.id.to_string(),
            author,
            content: post.content.clone(),
            tags,
            created_at: post.created_at,
            reactions: None,
            viewer_reaction: None,
            comments: Vec::new(),
        }
    }
}

// ============================================================================
// Tag & Reaction Type Mappers
// ============================================================================

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
        }
    }
}

impl From<&ReactionType> for ReactionTypeResponse {
    fn from(reaction_type: &ReactionType) -> Self {
        Self {
            id: reaction_type.id.to_string(),
            name: reaction_type.name.clone(),
        }
    }
}
