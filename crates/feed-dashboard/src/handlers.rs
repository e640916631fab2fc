//! Dashboard page handlers

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use feed_core::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use tracing::warn;

use crate::error::{DashboardError, DashboardResult};
use crate::publish::{share, ShareForm};
use crate::render::{self, MAX_DASHBOARD_PAGE_SIZE};
use crate::state::DashboardState;
use crate::uploader::UploadFile;

/// Feed page query (`?page=&page_size=`)
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FeedQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl FeedQuery {
    /// Page and page size, clamped to what the selector offers
    pub fn resolve(self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_DASHBOARD_PAGE_SIZE);
        (page, page_size)
    }
}

/// GET /
pub async fn feed(State(state): State<DashboardState>, Query(query): Query<FeedQuery>) -> Response {
    let (page, page_size) = query.resolve();

    match state.api().list_posts(page, page_size).await {
        Ok(posts) => Html(render::feed_page(&posts, page_size)).into_response(),
        Err(DashboardError::Api { status, body }) => {
            warn!(status, page, page_size, "Feed request rejected by API");
            (
                StatusCode::BAD_GATEWAY,
                Html(render::feed_error_page(status, &body)),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// GET /upload
pub async fn upload_form() -> Html<String> {
    Html(render::upload_page(None, "", ""))
}

/// POST /upload
///
/// Redirects to the first feed page on success; otherwise re-renders the
/// form with the error and the typed title and caption.
pub async fn upload(State(state): State<DashboardState>, multipart: Multipart) -> Response {
    let form = match read_share_form(multipart).await {
        Ok(form) => form,
        Err(e) => return form_error(&e, "", ""),
    };

    let (title, caption) = (form.title.clone(), form.caption.clone());

    match share(state.api(), state.uploader(), form).await {
        Ok(_) => Redirect::to("/?page=1").into_response(),
        Err(e) => {
            warn!(error = %e, "Share failed");
            form_error(&e, &title, &caption)
        }
    }
}

fn form_error(error: &DashboardError, title: &str, caption: &str) -> Response {
    (
        error.status_code(),
        Html(render::upload_page(Some(&error.to_string()), title, caption)),
    )
        .into_response()
}

async fn read_share_form(mut multipart: Multipart) -> DashboardResult<ShareForm> {
    let mut form = ShareForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DashboardError::form(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => {
                form.title = field
                    .text()
                    .await
                    .map_err(|e| DashboardError::form(e.body_text()))?;
            }
            "caption" => {
                form.caption = field
                    .text()
                    .await
                    .map_err(|e| DashboardError::form(e.body_text()))?;
            }
            "files" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| DashboardError::form(e.body_text()))?;

                // Browsers send one empty part when no file was picked
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }

                form.files.push(UploadFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}
