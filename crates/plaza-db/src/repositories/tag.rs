//! PostgreSQL implementation of TagRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use plaza_core::entities::Tag;
use plaza_core::error::DomainError;
use plaza_core::traits::{RepoResult, TagRepository};
use plaza_core::value_objects::Snowflake;

use crate::models::TagModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TagRepository
#[derive(Clone)]
pub struct PgTagRepository {
    pool: PgPool,
}

impl PgTagRepository {
    /// Create a new PgTagRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tag>> {
        let result = sqlx::query_as::<_, TagModel>(
            r#"
            SELECT id, name
            FROM tags
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Tag::from))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Tag>> {
        let results = sqlx::query_as::<_, TagModel>(
            r#"
            SELECT id, name
            FROM tags
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tag::from).collect())
    }

    #[instrument(skip(self, tag))]
    async fn create(&self, tag: &Tag) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tags (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(tag.id.into_inner())
        .bind(&tag.name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let name = tag.name.clone();
            map_unique_violation(e, || DomainError::TagAlreadyExists(name))
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn names_for_post(&self, post_id: Snowflake) -> RepoResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"
            SELECT t.name
            FROM tags t
            JOIN post_tags pt ON pt.tag_id = t.id
            WHERE pt.post_id = $1
            ORDER BY t.name
            "#,
        )
        .bind(post_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(names)
    }

    #[instrument(skip(self))]
    async fn attach_to_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, tag_id) DO NOTHING
            "#,
        )
        .bind(post_id.into_inner())
        .bind(tag_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn detach_from_post(&self, post_id: Snowflake, tag_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM post_tags WHERE post_id = $1 AND tag_id = $2
            "#,
        )
        .bind(post_id.into_inner())
        .bind(tag_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear_post_tags(&self, post_id: Snowflake) -> RepoResult<()> {
        sqlx::query(
            r#"
            DELETE FROM post_tags WHERE post_id = $1
            "#,
        )
        .bind(post_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
