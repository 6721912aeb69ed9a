//! Tag service
//!
//! Manages the tag vocabulary and post/tag associations. Tag names are
//! case-sensitive and matched exactly as stored.

use plaza_core::entities::Tag;
use plaza_core::error::DomainError;
use plaza_core::value_objects::Snowflake;
use tracing::{info, instrument};

use crate::dto::TagResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tag service
pub struct TagService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TagService<'a> {
    /// Create a new TagService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all tags
    #[instrument(skip(self))]
    pub async fn list_tags(&self) -> ServiceResult<Vec<TagResponse>> {
        let tags = self.ctx.tag_repo().list().await?;
        Ok(tags.iter().map(TagResponse::from).collect())
    }

    /// Find a tag by name, creating it if absent.
    /// A concurrent create racing on the unique name resolves by re-reading.
    #[instrument(skip(self))]
    pub async fn get_or_create(&self, name: &str) -> ServiceResult<Tag> {
        if let Some(tag) = self.ctx.tag_repo().find_by_name(name).await? {
            return Ok(tag);
        }

        let tag = Tag::new(self.ctx.generate_id(), name.to_string());
        match self.ctx.tag_repo().create(&tag).await {
            Ok(()) => Ok(tag),
            Err(DomainError::TagAlreadyExists(_)) => self
                .ctx
                .tag_repo()
                .find_by_name(name)
                .await?
                .ok_or_else(|| ServiceError::internal("Tag vanished after unique violation")),
            Err(e) => Err(e.into()),
        }
    }

    /// Attach tags to a post, creating unknown ones.
    /// Existing associations are kept.
    #[instrument(skip(self, names))]
    pub async fn add_tags_to_post(
        &self,
        post_id: Snowflake,
        names: &[String],
    ) -> ServiceResult<Vec<String>> {
        validate_names(names)?;
        self.require_post(post_id).await?;

        for name in names {
            let tag = self.get_or_create(name).await?;
            self.ctx.tag_repo().attach_to_post(post_id, tag.id).await?;
        }

        info!(post_id = %post_id, added = names.len(), "Tags added to post");

        Ok(self.ctx.tag_repo().names_for_post(post_id).await?)
    }

    /// Replace every tag of a post with the given names
    #[instrument(skip(self, names))]
    pub async fn replace_post_tags(
        &self,
        post_id: Snowflake,
        names: &[String],
    ) -> ServiceResult<Vec<String>> {
        validate_names(names)?;
        self.require_post(post_id).await?;

        self.ctx.tag_repo().clear_post_tags(post_id).await?;
        for name in names {
            let tag = self.get_or_create(name).await?;
            self.ctx.tag_repo().attach_to_post(post_id, tag.id).await?;
        }

        info!(post_id = %post_id, tags = names.len(), "Post tags replaced");

        Ok(self.ctx.tag_repo().names_for_post(post_id).await?)
    }

    /// Detach the named tags from a post; unknown names are skipped
    #[instrument(skip(self, names))]
    pub async fn remove_tags_from_post(
        &self,
        post_id: Snowflake,
        names: &[String],
    ) -> ServiceResult<Vec<String>> {
        validate_names(names)?;
        self.require_post(post_id).await?;

        for name in names {
            if let Some(tag) = self.ctx.tag_repo().find_by_name(name).await? {
                self.ctx
                    .tag_repo()
                    .detach_from_post(post_id, tag.id)
                    .await?;
            }
        }

        info!(post_id = %post_id, "Tags removed from post");

        Ok(self.ctx.tag_repo().names_for_post(post_id).await?)
    }

    async fn require_post(&self, post_id: Snowflake) -> ServiceResult<()> {
        if !self.ctx.post_repo().exists(post_id).await? {
            return Err(DomainError::PostNotFound(post_id).into());
        }
        Ok(())
    }
}

/// Reject empty name lists and blank names before any store interaction
fn validate_names(names: &[String]) -> ServiceResult<()> {
    if names.is_empty() {
        return Err(ServiceError::validation("tag name list must not be empty"));
    }
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(ServiceError::validation("tag names must not be blank"));
    }
    Ok(())
}
