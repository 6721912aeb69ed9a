//! Reaction service
//!
//! Aggregates reaction counts per target, resolves a viewer's own reaction,
//! and handles reaction upserts/deletes. Counts are computed on demand from
//! the reaction rows; there is no maintained counter state to drift.

use std::collections::BTreeMap;

use plaza_core::entities::Reaction;
use plaza_core::error::DomainError;
use plaza_core::value_objects::{Snowflake, TargetKind};
use tracing::{info, instrument};

use crate::dto::ReactionTypeResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notifier::Notifier;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reaction counts for a target, grouped by reaction-type name.
    /// Sparse: types nobody used are absent, never zero.
    #[instrument(skip(self))]
    pub async fn counts_for_target(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> ServiceResult<BTreeMap<String, i64>> {
        let counts = self
            .ctx
            .reaction_repo()
            .count_by_type(target_id, target_kind)
            .await?;

        Ok(counts.into_iter().collect())
    }

    /// The reaction-type name of one viewer's reaction on a target, if any
    #[instrument(skip(self))]
    pub async fn viewer_reaction(
        &self,
        viewer_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> ServiceResult<Option<String>> {
        let reaction = self
            .ctx
            .reaction_repo()
            .viewer_reaction_type(viewer_id, target_id, target_kind)
            .await?;

        Ok(reaction)
    }

    /// Create or replace the viewer's reaction on a target.
    ///
    /// The store's composite key serializes concurrent writes for the same
    /// (viewer, target, kind): a losing insert observes the unique violation
    /// and is retried as an update of the surviving row.
    #[instrument(skip(self))]
    pub async fn upsert_reaction(
        &self,
        viewer_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
        reaction_type_id: Snowflake,
    ) -> ServiceResult<()> {
        if !self.ctx.user_repo().exists(viewer_id).await? {
            return Err(DomainError::UserNotFound(viewer_id).into());
        }

        if self
            .ctx
            .reaction_type_repo()
            .find_by_id(reaction_type_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ReactionTypeNotFound(reaction_type_id).into());
        }

        let reaction = Reaction::new(viewer_id, target_id, target_kind, reaction_type_id);

        match self.ctx.reaction_repo().create(&reaction).await {
            Ok(()) => {}
            Err(DomainError::DuplicateReaction { .. }) => {
                // The viewer already reacted (or a concurrent insert won the
                // race): replace type and timestamp in place.
                if !self.ctx.reaction_repo().update_type(&reaction).await? {
                    // The row vanished between conflict and update; one more
                    // insert settles it.
                    self.ctx.reaction_repo().create(&reaction).await?;
                }
            }
            Err(e) => return Err(e.into()),
        }

        info!(
            viewer_id = %viewer_id,
            target_id = %target_id,
            target_kind = %target_kind,
            reaction_type_id = %reaction_type_id,
            "Reaction upserted"
        );

        self.publish_counts(target_id, target_kind).await?;

        Ok(())
    }

    /// Remove the viewer's reaction from a target
    #[instrument(skip(self))]
    pub async fn delete_reaction(
        &self,
        viewer_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> ServiceResult<()> {
        let removed = self
            .ctx
            .reaction_repo()
            .delete(viewer_id, target_id, target_kind)
            .await?;

        if !removed {
            return Err(ServiceError::from(DomainError::ReactionNotFound {
                user_id: viewer_id,
                target_id,
                target_kind,
            }));
        }

        info!(
            viewer_id = %viewer_id,
            target_id = %target_id,
            target_kind = %target_kind,
            "Reaction removed"
        );

        self.publish_counts(target_id, target_kind).await?;

        Ok(())
    }

    /// List the reaction vocabulary
    #[instrument(skip(self))]
    pub async fn list_reaction_types(&self) -> ServiceResult<Vec<ReactionTypeResponse>> {
        let types = self.ctx.reaction_type_repo().list().await?;
        Ok(types.iter().map(ReactionTypeResponse::from).collect())
    }

    /// Broadcast the target's fresh counts (best-effort)
    async fn publish_counts(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> ServiceResult<()> {
        let counts = self.counts_for_target(target_id, target_kind).await?;
        Notifier::new(self.ctx)
            .reaction_changed(target_id, target_kind, &counts)
            .await;
        Ok(())
    }
}
