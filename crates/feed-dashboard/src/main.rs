//! Dashboard entry point
//!
//! Run with:
//! ```bash
//! cargo run -p feed-dashboard
//! ```

use feed_common::{try_init_tracing_with_config, DashboardConfig, Environment, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let tracing_config = TracingConfig::for_environment(Environment::from_env());
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match DashboardConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(api = %config.api_base_url, port = config.server.port, "Starting dashboard");

    if let Err(e) = feed_dashboard::run(config).await {
        error!(error = %e, "Dashboard failed");
        std::process::exit(1);
    }
}
