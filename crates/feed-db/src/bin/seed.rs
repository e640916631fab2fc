//! feed-seed: fill the database with dummy posts

use anyhow::Context;
use clap::Parser;
use tracing::info;

use feed_common::{try_init_tracing_with_config, Environment, TracingConfig};
use feed_db::{create_pool, run_migrations, seed_dummy_posts, DatabaseConfig, DEFAULT_SEED_COUNT};

#[derive(Debug, Parser)]
#[command(name = "feed-seed", about = "Insert dummy posts for local development")]
struct Args {
    /// Number of posts to insert
    #[arg(short, long, default_value_t = DEFAULT_SEED_COUNT)]
    count: u32,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let _ = try_init_tracing_with_config(TracingConfig::for_environment(Environment::from_env()));

    let args = Args::parse();

    let config = DatabaseConfig::from_env();
    let pool = create_pool(&config)
        .await
        .context("failed to connect to the database")?;

    run_migrations(&pool)
        .await
        .context("failed to apply the schema")?;

    let inserted = seed_dummy_posts(&pool, args.count)
        .await
        .context("failed to add dummy posts")?;

    info!(inserted, "Seeding complete");
    Ok(())
}

