//! Route definitions

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{health, media, posts, root};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::welcome))
        .merge(post_routes())
        .merge(media_routes())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Feed routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/:public_id", get(posts::get_post))
}

/// Media host routes
fn media_routes() -> Router<AppState> {
    Router::new()
        .route("/upload_auth_params", get(media::upload_auth_params))
        .route("/signed_url", get(media::signed_url))
}
