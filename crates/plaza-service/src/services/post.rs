//! Post service
//!
//! Assembles the externally visible post views (author, tags, reaction
//! summary, viewer reaction, comment tree) and handles post CRUD.

use plaza_core::entities::Post;
use plaza_core::error::DomainError;
use plaza_core::traits::PostQuery;
use plaza_core::value_objects::{Snowflake, TargetKind};
use tracing::{info, instrument};

use crate::dto::{AuthorResponse, PostResponse};

use super::comment::CommentService;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reaction::ReactionService;

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get one annotated post view
    #[instrument(skip(self))]
    pub async fn get_post(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        self.project(&post, viewer_id).await
    }

    /// List annotated post views (offset/limit slice of the listing order)
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        query: PostQuery,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list(query).await?;
        self.project_all(posts, viewer_id).await
    }

    /// List annotated post views for one author
    #[instrument(skip(self))]
    pub async fn list_posts_by_author(
        &self,
        author_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_by_author(author_id).await?;
        self.project_all(posts, viewer_id).await
    }

    /// List annotated post views carrying a tag
    #[instrument(skip(self))]
    pub async fn list_posts_by_tag(
        &self,
        tag_name: &str,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().find_by_tag(tag_name).await?;
        self.project_all(posts, viewer_id).await
    }

    /// Create a post. The fresh projection has no reactions and no comments.
    #[instrument(skip(self, title, content))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        title: String,
        content: String,
    ) -> ServiceResult<PostResponse> {
        if !self.ctx.user_repo().exists(author_id).await? {
            return Err(DomainError::UserNotFound(author_id).into());
        }

        let post = Post::new(self.ctx.generate_id(), author_id, title, content);
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        self.project(&post, Some(author_id)).await
    }

    /// Update a post's title and content. The author is immutable.
    #[instrument(skip(self, title, content))]
    pub async fn update_post(
        &self,
        id: Snowflake,
        title: String,
        content: String,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<PostResponse> {
        let mut post = self
            .ctx
            .post_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PostNotFound(id))?;

        post.edit(title, content);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %id, "Post updated");

        self.project(&post, viewer_id).await
    }

    /// Delete a post, its comments, and every reaction aimed at any of them
    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.post_repo().exists(id).await? {
            return Err(DomainError::PostNotFound(id).into());
        }

        // Comment rows cascade with the post; their ids are collected first
        // so reactions aimed at them can be swept afterwards.
        let comment_ids: Vec<Snowflake> = self
            .ctx
            .comment_repo()
            .find_by_post(id)
            .await?
            .into_iter()
            .map(|c| c.id)
            .collect();

        self.ctx.post_repo().delete(id).await?;

        self.ctx
            .reaction_repo()
            .delete_for_targets(&[id], TargetKind::Post)
            .await?;
        self.ctx
            .reaction_repo()
            .delete_for_targets(&comment_ids, TargetKind::Comment)
            .await?;

        info!(post_id = %id, comments = comment_ids.len(), "Post deleted");

        Ok(())
    }

    /// Assemble the annotated view of one post
    async fn project(
        &self,
        post: &Post,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<PostResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| ServiceError::internal("Post author missing"))?;

        let tags = self.ctx.tag_repo().names_for_post(post.id).await?;

        let mut view = PostResponse::from_entity(post, AuthorResponse::from(&author), tags);

        let aggregator = ReactionService::new(self.ctx);
        let counts = aggregator
            .counts_for_target(post.id, TargetKind::Post)
            .await?;
        if !counts.is_empty() {
            view.reactions = Some(counts);
        }

        if let Some(viewer) = viewer_id {
            view.viewer_reaction = aggregator
                .viewer_reaction(viewer, post.id, TargetKind::Post)
                .await?;
        }

        view.comments = CommentService::new(self.ctx)
            .comments_for_post(post.id, viewer_id)
            .await?;

        Ok(view)
    }

    /// Project each post of a listing independently
    async fn project_all(
        &self,
        posts: Vec<Post>,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let mut views = Vec::with_capacity(posts.len());
        for post in &posts {
            views.push(self.project(post, viewer_id).await?);
        }
        Ok(views)
    }
}
