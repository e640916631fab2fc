//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests,
//! and isolating test data.

use std::env;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU16, Ordering};
use std::time::Duration;

use anyhow::Result;
use feed_api::{create_app, create_app_state};
use feed_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Counter for unique test ports
static PORT_COUNTER: AtomicU16 = AtomicU16::new(19000);

/// Get a unique port for testing
pub fn get_test_port() -> u16 {
    PORT_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Test server instance that manages lifecycle
///
/// Every server gets its own PostgreSQL schema, so feed counts and ordering
/// are not disturbed by tests running in parallel.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub config: AppConfig,
    schema: String,
    admin_url: String,
    handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on an empty schema
    pub async fn start() -> Result<Self> {
        let mut config = test_config()?;
        let admin_url = config.database.url.clone();

        let schema = format!("feed_test_{}", uuid::Uuid::new_v4().simple());
        create_schema(&admin_url, &schema).await?;
        config.database.url = with_search_path(&admin_url, &schema);

        let port = get_test_port();
        let addr = SocketAddr::from(([127, 0, 0, 1], port));

        // Create app state (runs the schema bootstrap inside the test schema)
        let state = create_app_state(config.clone()).await?;

        // Build application
        let app = create_app(state);

        // Bind to port
        let listener = TcpListener::bind(addr).await?;
        let actual_addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr: actual_addr,
            client,
            config,
            schema,
            admin_url,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Drop the test schema and everything in it
    pub async fn cleanup(self) -> Result<()> {
        self.handle.abort();
        let pool = feed_db::create_pool(&admin_db_config(&self.admin_url)).await?;
        sqlx::raw_sql(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&pool)
            .await?;
        pool.close().await;
        Ok(())
    }
}

fn admin_db_config(url: &str) -> feed_db::DatabaseConfig {
    feed_db::DatabaseConfig {
        url: url.to_string(),
        max_connections: 1,
        min_connections: 0,
        ..Default::default()
    }
}

async fn create_schema(admin_url: &str, schema: &str) -> Result<()> {
    let pool = feed_db::create_pool(&admin_db_config(admin_url)).await?;
    sqlx::raw_sql(&format!("CREATE SCHEMA {schema}"))
        .execute(&pool)
        .await?;
    pool.close().await;
    Ok(())
}

/// Point every connection of `url` at `schema` through the `options` parameter
pub fn with_search_path(url: &str, schema: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}options=-c%20search_path%3D{schema}")
}

/// Create a test configuration
///
/// Only `DATABASE_URL` has to be provided. Media keys are always dummy
/// values: signing happens locally and never reaches the media host.
pub fn test_config() -> Result<AppConfig> {
    // Load from environment or use defaults
    dotenvy::dotenv().ok();

    AppConfig::from_lookup(|key| {
        let fixed = match key {
            "IMAGEKIT_PRIVATE_KEY" => Some("private_integration"),
            "IMAGEKIT_PUBLIC_KEY" => Some("public_integration"),
            "IMAGEKIT_URL" => Some("https://ik.imagekit.io/integration"),
            "SIGNED_URL_EXPIRY_SECONDS" => Some("600"),
            _ => None,
        };
        if let Some(value) = fixed {
            return Some(value.to_string());
        }

        env::var(key).ok().or_else(|| {
            let fallback = match key {
                "API_PORT" => "0",
                "RATE_LIMIT_BURST" => "1000",
                "RATE_LIMIT_REQUESTS_PER_SECOND" => "1000",
                _ => return None,
            };
            Some(fallback.to_string())
        })
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    if env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_search_path() {
        assert_eq!(
            with_search_path("postgres://localhost/feed", "s1"),
            "postgres://localhost/feed?options=-c%20search_path%3Ds1"
        );
        assert_eq!(
            with_search_path("postgres://localhost/feed?sslmode=disable", "s1"),
            "postgres://localhost/feed?sslmode=disable&options=-c%20search_path%3Ds1"
        );
    }
}
