//! Direct uploads to the media host
//!
//! File bytes go from the dashboard straight to the media host's upload
//! endpoint, authenticated with single-use credentials issued by the API.

use std::time::Duration;

use feed_service::dto::UploadAuthResponse;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::client::NewPostArtifact;
use crate::error::{DashboardError, DashboardResult};

/// Extensions the share form accepts
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "mp4", "avi", "mov", "mkv", "webm"];

/// A file picked in the share form
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Lower-cased extension of the file name, if any
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    pub fn has_allowed_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
    }
}

/// Upload response from the media host (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    #[serde(default)]
    pub file_id: String,
    pub file_path: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<UploadedFile> for NewPostArtifact {
    fn from(file: UploadedFile) -> Self {
        Self {
            file_id: file.file_id,
            file_path: file.file_path,
            file_type: file.file_type,
            thumbnail_url: file.thumbnail_url.filter(|url| !url.is_empty()),
        }
    }
}

/// Client for the media host upload endpoint
#[derive(Debug, Clone)]
pub struct MediaUploader {
    http: reqwest::Client,
    upload_url: String,
}

impl MediaUploader {
    pub fn new(upload_url: impl Into<String>, timeout: Duration) -> DashboardResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            upload_url: upload_url.into(),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    /// Upload one file with the given credentials
    #[instrument(skip(self, file, credentials), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload(
        &self,
        file: &UploadFile,
        credentials: &UploadAuthResponse,
    ) -> DashboardResult<UploadedFile> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type)?;
        }

        let form = Form::new()
            .part("file", part)
            .text("fileName", file.file_name.clone())
            .text("token", credentials.token.clone())
            .text("expire", credentials.expire.to_string())
            .text("signature", credentials.signature.clone())
            .text("publicKey", credentials.public_key.clone());

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Upload {
                file_name: file.file_name.clone(),
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let uploaded: UploadedFile = response.json().await?;
        info!(file_path = %uploaded.file_path, "File uploaded to media host");
        Ok(uploaded)
    }
}
