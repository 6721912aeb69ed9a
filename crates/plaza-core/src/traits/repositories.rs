//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Comment, Post, Reaction, ReactionType, Tag, User};
use crate::error::DomainError;
use crate::value_objects::{Snowflake, TargetKind};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Check if a user exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;
}

// ============================================================================
// Post Repository
// ============================================================================

/// Offset/limit slicing for post listings
#[derive(Debug, Clone, Copy)]
pub struct PostQuery {
    pub offset: i64,
    pub limit: i64,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 50,
        }
    }
}

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Check if a post exists
    async fn exists(&self, id: Snowflake) -> RepoResult<bool>;

    /// List posts ordered by creation time
    async fn list(&self, query: PostQuery) -> RepoResult<Vec<Post>>;

    /// List posts by author, ordered by creation time
    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Post>>;

    /// List posts carrying a tag, ordered by creation time
    async fn find_by_tag(&self, tag_name: &str) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;

    /// Update title/content/updated_at of an existing post
    async fn update(&self, post: &Post) -> RepoResult<()>;

    /// Hard-delete a post; owned comments cascade at the store
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// All comments of a post (every nesting level), creation time ascending
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Create a new comment
    async fn create(&self, comment: &Comment) -> RepoResult<()>;

    /// Hard-delete a comment and every descendant reply.
    /// Returns the ids of ALL removed comments (the root included).
    async fn delete(&self, id: Snowflake) -> RepoResult<Vec<Snowflake>>;
}

// ============================================================================
// Tag Repository
// ============================================================================

#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Find tag by exact (case-sensitive) name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tag>>;

    /// List all tags
    async fn list(&self) -> RepoResult<Vec<Tag>>;

    /// Create a new tag; name uniqueness enforced by the store
    async fn create(&self, tag: &Tag) -> RepoResult<()>;

    /// Tag names attached to a post
    async fn names_for_post(&self, post_id: Snowflake) -> RepoResult<Vec<String>>;

    /// Attach a tag to a post (no-op when already attached)
    async fn attach_to_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()>;

    /// Detach a tag from a post
    async fn detach_from_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()>;

    /// Remove every tag from a post
    async fn clear_post_tags(&self, post_id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Reaction Type Repository
// ============================================================================

#[async_trait]
pub trait ReactionTypeRepository: Send + Sync {
    /// Find reaction type by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ReactionType>>;

    /// Find reaction type by name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ReactionType>>;

    /// List the full vocabulary
    async fn list(&self) -> RepoResult<Vec<ReactionType>>;

    /// Add a type to the vocabulary
    async fn create(&self, reaction_type: &ReactionType) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a reaction row. A row already present for the
    /// (user, target, kind) key surfaces as `DomainError::DuplicateReaction`;
    /// the store's composite key is the serialization point.
    async fn create(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Replace type and timestamp of the existing row for the key.
    /// Returns false when no row matched.
    async fn update_type(&self, reaction: &Reaction) -> RepoResult<bool>;

    /// Remove the reaction for the key. Returns false when no row matched.
    async fn delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<bool>;

    /// Remove every reaction aimed at the given targets of one kind
    async fn delete_for_targets(
        &self,
        target_ids: &[Snowflake],
        target_kind: TargetKind,
    ) -> RepoResult<u64>;

    /// Count a target's reactions grouped by reaction-type name.
    /// Sparse: types without reactions never appear.
    async fn count_by_type(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Vec<(String, i64)>>;

    /// The reaction-type name of one viewer's reaction on one target, if any
    async fn viewer_reaction_type(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Option<String>>;
}
