//! Welcome endpoint

use axum::Json;
use feed_service::dto::WelcomeResponse;

/// Welcome message
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse))
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse::default())
}
