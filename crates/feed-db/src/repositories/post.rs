//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feed_core::entities::{Artifact, NewArtifact, Post};
use feed_core::traits::{PostRepository, RepoResult};
use feed_core::value_objects::PublicId;

use crate::mappers::{assemble_posts, ArtifactInsert, PostInsert};
use crate::models::{ArtifactModel, PostModel};

use super::error::map_db_error;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the artifacts of several posts in a single round trip
    async fn load_artifacts(&self, post_ids: &[i64]) -> RepoResult<Vec<ArtifactModel>> {
        if post_ids.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, ArtifactModel>(
            r#"
            SELECT id, public_id, post_id, file_id, file_path, file_type, thumbnail_url,
                   created_at, updated_at
            FROM artifacts
            WHERE post_id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(count.0)
    }

    #[instrument(skip(self))]
    async fn find_page(&self, offset: i64, limit: i64) -> RepoResult<Vec<Post>> {
        let posts = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, public_id, title, content, created_at, updated_at
            FROM posts
            ORDER BY id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(offset.max(0))
        .bind(limit.max(1))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        let artifacts = self.load_artifacts(&ids).await?;

        Ok(assemble_posts(posts, artifacts))
    }

    #[instrument(skip(self))]
    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r#"
            SELECT id, public_id, title, content, created_at, updated_at
            FROM posts
            WHERE public_id = $1
            "#,
        )
        .bind(public_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = result else {
            return Ok(None);
        };

        let artifacts = self.load_artifacts(&[model.id]).await?;
        Ok(assemble_posts(vec![model], artifacts).pop())
    }

    #[instrument(skip(self, content))]
    async fn create(&self, title: &str, content: &str) -> RepoResult<Post> {
        let insert = PostInsert::new(title, content);

        let model = sqlx::query_as::<_, PostModel>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, public_id, title, content, created_at, updated_at
            "#,
        )
        .bind(insert.title)
        .bind(insert.content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self, content, artifacts), fields(artifact_count = artifacts.len()))]
    async fn create_with_artifacts(
        &self,
        title: &str,
        content: &str,
        artifacts: &[NewArtifact],
    ) -> RepoResult<Post> {
        let insert = PostInsert::new(title, content);

        // Rolled back on drop if any statement below fails
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, PostModel>(
            r#"
            INSERT INTO posts (title, content)
            VALUES ($1, $2)
            RETURNING id, public_id, title, content, created_at, updated_at
            "#,
        )
        .bind(insert.title)
        .bind(insert.content)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let mut created = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let row = ArtifactInsert::new(model.id, artifact);
            let artifact_model = sqlx::query_as::<_, ArtifactModel>(
                r#"
                INSERT INTO artifacts (post_id, file_id, file_path, file_type, thumbnail_url)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, public_id, post_id, file_id, file_path, file_type, thumbnail_url,
                          created_at, updated_at
                "#,
            )
            .bind(row.post_id)
            .bind(row.file_id)
            .bind(row.file_path)
            .bind(row.file_type)
            .bind(row.thumbnail_url)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            created.push(Artifact::from(artifact_model));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(Post::from(model).with_artifacts(created))
    }
}
