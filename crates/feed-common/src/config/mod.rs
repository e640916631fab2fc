//! Configuration structs

mod app_config;
mod dashboard_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, MediaConfig,
    RateLimitConfig, ServerConfig,
};
pub use dashboard_config::DashboardConfig;
