//! Dashboard process configuration

use std::env;

use super::app_config::{default_host, parse_or, ConfigError, Environment, ServerConfig};

/// Media host endpoint that accepts direct file uploads
pub const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// Configuration for the `feed-dashboard` binary
///
/// The dashboard never touches the database or the media private key: it
/// talks to the API over HTTP and uploads bytes with API-issued credentials.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub env: Environment,
    pub server: ServerConfig,
    /// Base URL of the feed API, without trailing slash
    pub api_base_url: String,
    pub upload_url: String,
    pub request_timeout_secs: u64,
}

impl DashboardConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("DASHBOARD_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("DASHBOARD_PORT", raw))?,
            None => 8501,
        };

        let api_base_url = lookup("API_BASE_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            env: lookup("APP_ENV")
                .and_then(|s| Environment::parse(&s))
                .unwrap_or_default(),
            server: ServerConfig {
                host: lookup("DASHBOARD_HOST").unwrap_or_else(default_host),
                port,
            },
            api_base_url,
            upload_url: lookup("IMAGEKIT_UPLOAD_URL")
                .unwrap_or_else(|| DEFAULT_UPLOAD_URL.to_string()),
            request_timeout_secs: parse_or(lookup("DASHBOARD_REQUEST_TIMEOUT_SECONDS"), || 60),
        })
    }
}
