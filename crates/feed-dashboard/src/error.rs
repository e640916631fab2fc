//! Dashboard error types

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::render;

/// Errors surfaced to the dashboard user
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// The feed API answered with a non-success status
    #[error("API request failed ({status}): {body}")]
    Api { status: u16, body: String },

    /// The media host rejected an upload
    #[error("Upload of {file_name} failed ({status}): {body}")]
    Upload {
        file_name: String,
        status: u16,
        body: String,
    },

    /// Network or decoding failure talking to the API or media host
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The submitted form is incomplete or malformed
    #[error("{0}")]
    Form(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DashboardError {
    pub fn form(msg: impl Into<String>) -> Self {
        Self::Form(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Form(_) => StatusCode::BAD_REQUEST,
            Self::Api { .. } | Self::Upload { .. } | Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Dashboard request failed");
        }
        (status, Html(render::error_page(&self.to_string()))).into_response()
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
