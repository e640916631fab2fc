//! Media handlers
//!
//! Upload credentials and ad-hoc signed URLs for the media host.

use axum::{extract::State, Json};
use feed_service::dto::{SignedUrlQuery, UploadAuthResponse};
use feed_service::MediaService;

use crate::extractors::ApiQuery;
use crate::response::{ApiResult, ErrorBody};
use crate::state::AppState;

/// Issue single-use upload credentials
///
/// GET /upload_auth_params
#[utoipa::path(
    get,
    path = "/upload_auth_params",
    tag = "media",
    responses(
        (status = 200, description = "Upload credentials", body = UploadAuthResponse),
        (status = 500, description = "Media host error", body = ErrorBody)
    )
)]
pub async fn upload_auth_params(
    State(state): State<AppState>,
) -> ApiResult<Json<UploadAuthResponse>> {
    let service = MediaService::new(state.service_context());
    let credentials = service.upload_credentials()?;
    Ok(Json(credentials))
}

/// Sign a display URL for a stored file path
///
/// GET /signed_url?file_path=&expire_seconds=
#[utoipa::path(
    get,
    path = "/signed_url",
    tag = "media",
    params(SignedUrlQuery),
    responses(
        (status = 200, description = "Signed URL as a JSON string", body = String),
        (status = 400, description = "Empty file path", body = ErrorBody),
        (status = 500, description = "Media host error", body = ErrorBody)
    )
)]
pub async fn signed_url(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SignedUrlQuery>,
) -> ApiResult<Json<String>> {
    let service = MediaService::new(state.service_context());
    let url = service.signed_url(query)?;
    Ok(Json(url))
}
