//! PostgreSQL implementation of ReactionTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use plaza_core::entities::ReactionType;
use plaza_core::traits::{ReactionTypeRepository, RepoResult};
use plaza_core::value_objects::Snowflake;

use crate::models::ReactionTypeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionTypeRepository
#[derive(Clone)]
pub struct PgReactionTypeRepository {
    pool: PgPool,
}

impl PgReactionTypeRepository {
    /// Create a new PgReactionTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionTypeRepository for PgReactionTypeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ReactionType>> {
        let result = sqlx::query_as::<_, ReactionTypeModel>(
            r#"
            SELECT id, name
            FROM reaction_types
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionType::from))
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ReactionType>> {
        let result = sqlx::query_as::<_, ReactionTypeModel>(
            r#"
            SELECT id, name
            FROM reaction_types
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ReactionType::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<ReactionType>> {
        let results = sqlx::query_as::<_, ReactionTypeModel>(
            r#"
            SELECT id, name
            FROM reaction_types
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReactionType::from).collect())
    }

    #[instrument(skip(self, reaction_type))]
    async fn create(&self, reaction_type: &ReactionType) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO reaction_types (id, name)
            VALUES ($1, $2)
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .bind(reaction_type.id.into_inner())
        .bind(&reaction_type.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
