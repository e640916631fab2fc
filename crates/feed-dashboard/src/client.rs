//! HTTP client for the feed API

use std::time::Duration;

use feed_service::dto::{PostPageResponse, PostResponse, UploadAuthResponse};
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{DashboardError, DashboardResult};

/// Body of `POST /posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub artifacts: Vec<NewPostArtifact>,
}

/// One uploaded media file, as the API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPostArtifact {
    pub file_id: String,
    pub file_path: String,
    pub file_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Thin typed wrapper over the feed API endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> DashboardResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /posts?page=&page_size=
    #[instrument(skip(self))]
    pub async fn list_posts(&self, page: i64, page_size: i64) -> DashboardResult<PostPageResponse> {
        let response = self
            .http
            .get(self.url("/posts"))
            .query(&[("page", page), ("page_size", page_size)])
            .send()
            .await?;
        read_json(response).await
    }

    /// GET /upload_auth_params
    #[instrument(skip(self))]
    pub async fn upload_auth_params(&self) -> DashboardResult<UploadAuthResponse> {
        let response = self.http.get(self.url("/upload_auth_params")).send().await?;
        read_json(response).await
    }

    /// POST /posts
    #[instrument(skip(self, post), fields(artifacts = post.artifacts.len()))]
    pub async fn create_post(&self, post: &NewPost) -> DashboardResult<PostResponse> {
        let response = self.http.post(self.url("/posts")).json(post).send().await?;
        read_json(response).await
    }
}

/// Decode a success body, or turn the status and raw body into an error
async fn read_json<T: DeserializeOwned>(response: Response) -> DashboardResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        debug!(status = status.as_u16(), %body, "API returned an error");
        return Err(DashboardError::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}
