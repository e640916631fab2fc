//! Dashboard router and server runner

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use feed_common::DashboardConfig;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{DashboardError, DashboardResult};
use crate::handlers;
use crate::state::DashboardState;

/// Largest share form accepted, all files together
pub const MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Build the dashboard router
pub fn create_app(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(handlers::feed))
        .route("/upload", get(handlers::upload_form).post(handlers::upload))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the dashboard until Ctrl+C
pub async fn run(config: DashboardConfig) -> DashboardResult<()> {
    let state = DashboardState::from_config(&config)?;
    let app = create_app(state);

    let addr = config.server.address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| DashboardError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .map_err(|e| DashboardError::Config(format!("Server error: {e}")))?;

    Ok(())
}
