//! PostgreSQL implementation of ArtifactRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Artifact, NewArtifact};
use feed_core::traits::{ArtifactRepository, RepoResult};
use feed_core::value_objects::PublicId;

use crate::mappers::ArtifactInsert;
use crate::models::ArtifactModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ArtifactRepository
#[derive(Clone)]
pub struct PgArtifactRepository {
    pool: PgPool,
}

impl PgArtifactRepository {
    /// Create a new PgArtifactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArtifactRepository for PgArtifactRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artifacts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Artifact>> {
        let result = sqlx::query_as::<_, ArtifactModel>(
            r#"
            SELECT id, public_id, post_id, file_id, file_path, file_type, thumbnail_url,
                   created_at, updated_at
            FROM artifacts
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Artifact::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Artifact>> {
        let results = sqlx::query_as::<_, ArtifactModel>(
            r#"
            SELECT id, public_id, post_id, file_id, file_path, file_type, thumbnail_url,
                   created_at, updated_at
            FROM artifacts
            WHERE post_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Artifact::from).collect())
    }

    #[instrument(skip(self, artifacts), fields(artifact_count = artifacts.len()))]
    async fn create_batch(&self, post_id: i64, artifacts: &[NewArtifact]) -> RepoResult<()> {
        // Each row commits on its own; see the trait docs.
        for artifact in artifacts {
            let row = ArtifactInsert::new(post_id, artifact);
            sqlx::query(
                r#"
                INSERT INTO artifacts (post_id, file_id, file_path, file_type, thumbnail_url)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(row.post_id)
            .bind(row.file_id)
            .bind(row.file_path)
            .bind(row.file_type)
            .bind(row.thumbnail_url)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        }

        Ok(())
    }
}
