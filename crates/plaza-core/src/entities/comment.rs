//! Comment entity - a comment on a post, optionally replying to another comment

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Comment entity
///
/// Comments form a forest per post: `parent_id = None` marks a top-level
/// comment, otherwise it references another comment of the SAME post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub parent_id: Option<Snowflake>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new top-level Comment
    pub fn new(id: Snowflake, post_id: Snowflake, author_id: Snowflake, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            author_id,
            parent_id: None,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a reply to another comment
    pub fn new_reply(
        id: Snowflake,
        post_id: Snowflake,
        author_id: Snowflake,
        parent_id: Snowflake,
        content: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            post_id,
            author_id,
            parent_id: Some(parent_id),
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if comment is a reply
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }

    /// Check if comment content is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty()
    }
}
