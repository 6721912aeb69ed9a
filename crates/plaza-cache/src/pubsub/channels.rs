//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub. The system
//! broadcasts on exactly two well-known channels: one shared by all new
//! comments, one shared by all reaction-count changes.

use plaza_core::events::{NEW_COMMENT_TOPIC, REACTION_CHANGED_TOPIC};

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Every newly created comment, for all posts
    NewComments,
    /// Every reaction-count change, for posts and comments alike
    ReactionChanges,
    /// Custom channel name
    Custom(String),
}

impl PubSubChannel {
    /// Create a custom channel
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::NewComments => NEW_COMMENT_TOPIC,
            Self::ReactionChanges => REACTION_CHANGED_TOPIC,
            Self::Custom(name) => name,
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            NEW_COMMENT_TOPIC => Self::NewComments,
            REACTION_CHANGED_TOPIC => Self::ReactionChanges,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
