//! Schema bootstrap
//!
//! The schema ships inside the binary and is applied with plain SQL, so the
//! crate does not need the sqlx compile-time macros.

use sqlx::PgPool;
use tracing::info;

const SCHEMA: &str = include_str!("../migrations/0001_create_posts_and_artifacts.sql");

/// Create the posts/artifacts tables, indexes and triggers if missing
///
/// Idempotent; the API calls this on every start-up.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
