//! Application configuration structs
//!
//! Loads configuration for the API server from environment variables
//! (optionally seeded from a `.env` file).

use serde::Deserialize;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse a name such as "production"; unknown names yield `None`
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }

    /// Read `APP_ENV`, defaulting to development
    pub fn from_env() -> Self {
        env::var("APP_ENV")
            .ok()
            .and_then(|s| Self::parse(&s))
            .unwrap_or_default()
    }
}

/// Server bind configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// External media host (ImageKit) configuration
///
/// Passed explicitly to the media broker; nothing reads these keys from
/// process-wide state.
#[derive(Clone, Deserialize)]
pub struct MediaConfig {
    pub private_key: String,
    pub public_key: String,
    /// Base delivery URL, e.g. `https://ik.imagekit.io/your_id`
    pub url_endpoint: String,
    #[serde(default = "default_signed_url_expiry")]
    pub signed_url_expiry_secs: u64,
}

impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaConfig")
            .field("private_key", &"[redacted]")
            .field("public_key", &self.public_key)
            .field("url_endpoint", &self.url_endpoint)
            .field("signed_url_expiry_secs", &self.signed_url_expiry_secs)
            .finish()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_second: default_requests_per_second(),
            burst: default_burst(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "feed-api".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_signed_url_expiry() -> u64 {
    feed_core::DEFAULT_SIGNED_URL_EXPIRY_SECS
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

/// Parse an optional variable, falling back to `default` when unset or invalid
pub(crate) fn parse_or<T: FromStr>(value: Option<String>, default: impl FnOnce() -> T) -> T {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or_else(default)
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::MissingVar(key));

        let api_port = required("API_PORT")?;
        let api_port = api_port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("API_PORT", api_port))?;

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: api_port,
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parse_or(
                    lookup("DATABASE_MAX_CONNECTIONS"),
                    default_max_connections,
                ),
                min_connections: parse_or(
                    lookup("DATABASE_MIN_CONNECTIONS"),
                    default_min_connections,
                ),
            },
            media: MediaConfig {
                private_key: required("IMAGEKIT_PRIVATE_KEY")?,
                public_key: required("IMAGEKIT_PUBLIC_KEY")?,
                url_endpoint: required("IMAGEKIT_URL")?,
                signed_url_expiry_secs: parse_or(
                    lookup("SIGNED_URL_EXPIRY_SECONDS"),
                    default_signed_url_expiry,
                ),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: parse_or(
                    lookup("RATE_LIMIT_REQUESTS_PER_SECOND"),
                    default_requests_per_second,
                ),
                burst: parse_or(lookup("RATE_LIMIT_BURST"), default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn minimal_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("API_PORT", "8000"),
            ("DATABASE_URL", "postgres://localhost/feed"),
            ("IMAGEKIT_PRIVATE_KEY", "private_test"),
            ("IMAGEKIT_PUBLIC_KEY", "public_test"),
            ("IMAGEKIT_URL", "https://ik.imagekit.io/demo"),
        ]
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("PRODUCTION"), Some(Environment::Production));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("qa"), None);
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_from_lookup_applies_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&minimal_vars())).unwrap();
        assert_eq!(config.app.name, "feed-api");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.media.signed_url_expiry_secs, 600);
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn test_from_lookup_missing_media_key() {
        let vars: Vec<_> = minimal_vars()
            .into_iter()
            .filter(|(k, _)| *k != "IMAGEKIT_PRIVATE_KEY")
            .collect();
        let err = AppConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("IMAGEKIT_PRIVATE_KEY")));
    }

    #[test]
    fn test_from_lookup_invalid_port() {
        let mut vars = minimal_vars();
        vars[0] = ("API_PORT", "eighty");
        let err = AppConfig::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("API_PORT", _)));
    }

    #[test]
    fn test_cors_origins_are_split() {
        let mut vars = minimal_vars();
        vars.push(("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,"));
        let config = AppConfig::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn test_media_config_debug_redacts_private_key() {
        let config = AppConfig::from_lookup(lookup_from(&minimal_vars())).unwrap();
        let debug = format!("{:?}", config.media);
        assert!(!debug.contains("private_test"));
        assert!(debug.contains("public_test"));
    }
}
