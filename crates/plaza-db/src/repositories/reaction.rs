//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use plaza_core::entities::Reaction;
use plaza_core::error::DomainError;
use plaza_core::traits::{ReactionRepository, RepoResult};
use plaza_core::value_objects::{Snowflake, TargetKind};

use crate::models::ReactionCountModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of ReactionRepository
///
/// The composite primary key (user_id, target_id, target_kind) is the
/// serialization point for concurrent writes: a losing insert observes a
/// unique violation and is retried as an update by the caller.
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self, reaction))]
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reactions (user_id, target_id, target_kind, reaction_type_id, reacted_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.target_id.into_inner())
        .bind(reaction.target_kind.as_str())
        .bind(reaction.reaction_type_id.into_inner())
        .bind(reaction.reacted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let (user_id, target_id, target_kind) =
                (reaction.user_id, reaction.target_id, reaction.target_kind);
            map_unique_violation(e, || DomainError::DuplicateReaction {
                user_id,
                target_id,
                target_kind,
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self, reaction))]
    async fn update_type(&self, reaction: &Reaction) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE reactions
            SET reaction_type_id = $4, reacted_at = $5
            WHERE user_id = $1 AND target_id = $2 AND target_kind = $3
            "#,
        )
        .bind(reaction.user_id.into_inner())
        .bind(reaction.target_id.into_inner())
        .bind(reaction.target_kind.as_str())
        .bind(reaction.reaction_type_id.into_inner())
        .bind(reaction.reacted_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE user_id = $1 AND target_id = $2 AND target_kind = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(target_kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, target_ids))]
    async fn delete_for_targets(
        &self,
        target_ids: &[Snowflake],
        target_kind: TargetKind,
    ) -> RepoResult<u64> {
        if target_ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = target_ids.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query(
            r#"
            DELETE FROM reactions
            WHERE target_kind = $1 AND target_id = ANY($2)
            "#,
        )
        .bind(target_kind.as_str())
        .bind(&ids)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn count_by_type(
        &self,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Vec<(String, i64)>> {
        let results = sqlx::query_as::<_, ReactionCountModel>(
            r#"
            SELECT rt.name, COUNT(*) AS count
            FROM reactions r
            JOIN reaction_types rt ON rt.id = r.reaction_type_id
            WHERE r.target_id = $1 AND r.target_kind = $2
            GROUP BY rt.name
            ORDER BY count DESC
            "#,
        )
        .bind(target_id.into_inner())
        .bind(target_kind.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(|r| (r.name, r.count)).collect())
    }

    #[instrument(skip(self))]
    async fn viewer_reaction_type(
        &self,
        user_id: Snowflake,
        target_id: Snowflake,
        target_kind: TargetKind,
    ) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r#"
            SELECT rt.name
            FROM reactions r
            JOIN reaction_types rt ON rt.id = r.reaction_type_id
            WHERE r.user_id = $1 AND r.target_id = $2 AND r.target_kind = $3
            "#,
        )
        .bind(user_id.into_inner())
        .bind(target_id.into_inner())
        .bind(target_kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
