//! Dummy data for local development

use sqlx::PgPool;
use tracing::{info, instrument};

use feed_core::traits::RepoResult;

use crate::repositories::map_db_error;

/// Number of posts `feed-seed` inserts when no count is given
pub const DEFAULT_SEED_COUNT: u32 = 15;

/// Title and content of the `index`-th dummy post (1-based)
pub fn dummy_post(index: u32) -> (String, String) {
    (
        format!("Dummy Post {index}"),
        format!("This is the content for dummy post {index}. It's great!"),
    )
}

/// Insert `count` dummy posts in a single transaction
///
/// Either every post is written or none is: the transaction rolls back when
/// dropped uncommitted.
#[instrument(skip(pool))]
pub async fn seed_dummy_posts(pool: &PgPool, count: u32) -> RepoResult<u32> {
    let mut tx = pool.begin().await.map_err(map_db_error)?;

    for index in 1..=count {
        let (title, content) = dummy_post(index);
        sqlx::query("INSERT INTO posts (title, content) VALUES ($1, $2)")
            .bind(title)
            .bind(content)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
    }

    tx.commit().await.map_err(map_db_error)?;
    info!(count, "Added dummy posts");

    Ok(count)
}
