//! Comment service
//!
//! Builds annotated comment trees for posts and handles comment
//! creation/deletion. Comments are stored flat (each row holds a parent id);
//! the tree view is assembled by grouping children by parent and walking an
//! explicit stack, so arbitrarily deep threads cannot exhaust the call stack
//! and a malformed parent cycle cannot hang the walk.

use std::collections::{HashMap, HashSet};

use plaza_core::entities::Comment;
use plaza_core::error::DomainError;
use plaza_core::value_objects::{Snowflake, TargetKind};
use tracing::{info, instrument};

use crate::dto::{AuthorResponse, CommentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notifier::Notifier;
use super::reaction::ReactionService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The full annotated comment tree of a post.
    /// Top level and every reply level are ordered by creation time ascending.
    #[instrument(skip(self))]
    pub async fn comments_for_post(
        &self,
        post_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        let roots: Vec<Snowflake> = comments
            .iter()
            .filter(|c| c.parent_id.is_none())
            .map(|c| c.id)
            .collect();

        self.assemble(&comments, roots, viewer_id).await
    }

    /// The annotated subtrees of a comment's direct replies,
    /// for on-demand reply loading
    #[instrument(skip(self))]
    pub async fn replies_for_comment(
        &self,
        parent_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let parent = self
            .ctx
            .comment_repo()
            .find_by_id(parent_id)
            .await?
            .ok_or(DomainError::CommentNotFound(parent_id))?;

        let comments = self.ctx.comment_repo().find_by_post(parent.post_id).await?;
        let roots: Vec<Snowflake> = comments
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .map(|c| c.id)
            .collect();

        self.assemble(&comments, roots, viewer_id).await
    }

    /// A single comment with its annotated reply subtree
    #[instrument(skip(self))]
    pub async fn get_comment(
        &self,
        id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<CommentResponse> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CommentNotFound(id))?;

        let comments = self.ctx.comment_repo().find_by_post(comment.post_id).await?;
        let mut nodes = self.assemble(&comments, vec![id], viewer_id).await?;

        nodes
            .pop()
            .ok_or_else(|| ServiceError::internal("assembled subtree lost its root"))
    }

    /// Create a comment (or a reply, when `parent_comment_id` is given).
    ///
    /// The parent must belong to the same post as the new comment. On
    /// success the annotated comment is broadcast to the shared comment
    /// channel; a fresh comment carries no reactions and no viewer reaction.
    #[instrument(skip(self, content))]
    pub async fn create_comment(
        &self,
        author_id: Snowflake,
        post_id: Snowflake,
        content: String,
        parent_comment_id: Option<Snowflake>,
    ) -> ServiceResult<CommentResponse> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        if !self.ctx.post_repo().exists(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }

        if let Some(parent_id) = parent_comment_id {
            let parent = self
                .ctx
                .comment_repo()
                .find_by_id(parent_id)
                .await?
                .ok_or(DomainError::CommentNotFound(parent_id))?;

            if parent.post_id != post_id {
                return Err(DomainError::ParentOutsidePost { parent_id, post_id }.into());
            }
        }

        let id = self.ctx.generate_id();
        let comment = match parent_comment_id {
            Some(parent_id) => Comment::new_reply(id, post_id, author_id, parent_id, content),
            None => Comment::new(id, post_id, author_id, content),
        };

        self.ctx.comment_repo().create(&comment).await?;

        info!(
            comment_id = %comment.id,
            post_id = %post_id,
            parent_comment_id = ?parent_comment_id,
            "Comment created"
        );

        let response = CommentResponse::from_entity(&comment, AuthorResponse::from(&author));

        Notifier::new(self.ctx).comment_created(&response).await;

        Ok(response)
    }

    /// Delete a comment and its whole reply subtree, removing reactions
    /// aimed at any of the deleted comments
    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: Snowflake) -> ServiceResult<()> {
        let removed = self.ctx.comment_repo().delete(id).await?;
        if removed.is_empty() {
            return Err(DomainError::CommentNotFound(id).into());
        }

        self.ctx
            .reaction_repo()
            .delete_for_targets(&removed, TargetKind::Comment)
            .await?;

        info!(comment_id = %id, removed = removed.len(), "Comment subtree deleted");

        Ok(())
    }

    /// Assemble annotated nodes for `roots` (and everything below them)
    /// out of a post's flat comment list.
    ///
    /// `comments` must be ordered by creation time ascending; reply lists
    /// inherit that order. The walk is iterative and skips already-visited
    /// ids, so corrupt parent links cannot recurse or loop forever.
    async fn assemble(
        &self,
        comments: &[Comment],
        roots: Vec<Snowflake>,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<CommentResponse>> {
        let by_id: HashMap<Snowflake, &Comment> = comments.iter().map(|c| (c.id, c)).collect();

        let mut children: HashMap<Snowflake, Vec<Snowflake>> = HashMap::new();
        for comment in comments {
            if let Some(parent_id) = comment.parent_id {
                children.entry(parent_id).or_default().push(comment.id);
            }
        }

        // Pre-order over the forest with an explicit stack. Each node is
        // attached to the parent that discovered it; with intact data that
        // is its stored parent, and a corrupt cycle degrades to a spanning
        // tree instead of looping or dropping nodes.
        let mut order = Vec::with_capacity(comments.len());
        let mut tree_children: HashMap<Snowflake, Vec<Snowflake>> = HashMap::new();
        let mut visited = HashSet::with_capacity(comments.len());
        let mut stack: Vec<(Option<Snowflake>, Snowflake)> =
            roots.iter().rev().map(|id| (None, *id)).collect();
        while let Some((discovered_via, id)) = stack.pop() {
            if !by_id.contains_key(&id) || !visited.insert(id) {
                continue;
            }
            if let Some(parent_id) = discovered_via {
                tree_children.entry(parent_id).or_default().push(id);
            }
            order.push(id);
            if let Some(kids) = children.get(&id) {
                stack.extend(kids.iter().rev().map(|kid| (Some(id), *kid)));
            }
        }

        // Annotate every reachable node
        let aggregator = ReactionService::new(self.ctx);
        let mut authors: HashMap<Snowflake, AuthorResponse> = HashMap::new();
        let mut annotated: HashMap<Snowflake, CommentResponse> =
            HashMap::with_capacity(order.len());

        for id in &order {
            let comment = by_id[id];

            let author = match authors.get(&comment.author_id) {
                Some(author) => author.clone(),
                None => {
                    let user = self
                        .ctx
                        .user_repo()
                        .find_by_id(comment.author_id)
                        .await?
                        .ok_or_else(|| ServiceError::internal("Comment author missing"))?;
                    let author = AuthorResponse::from(&user);
                    authors.insert(comment.author_id, author.clone());
                    author
                }
            };

            let mut node = CommentResponse::from_entity(comment, author);

            let counts = aggregator
                .counts_for_target(comment.id, TargetKind::Comment)
                .await?;
            if !counts.is_empty() {
                node.reactions = Some(counts);
            }

            if let Some(viewer) = viewer_id {
                node.viewer_reaction = aggregator
                    .viewer_reaction(viewer, comment.id, TargetKind::Comment)
                    .await?;
            }

            annotated.insert(*id, node);
        }

        // In reverse pre-order every discovered child is built before its
        // parent, so parents claim their finished reply lists bottom-up.
        for id in order.iter().rev() {
            if let Some(kids) = tree_children.get(id) {
                let replies: Vec<CommentResponse> =
                    kids.iter().filter_map(|kid| annotated.remove(kid)).collect();
                if let Some(node) = annotated.get_mut(id) {
                    node.replies = replies;
                }
            }
        }

        Ok(roots
            .iter()
            .filter_map(|id| annotated.remove(id))
            .collect())
    }
}
