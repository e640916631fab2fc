//! Dashboard state

use std::time::Duration;

use feed_common::DashboardConfig;

use crate::client::ApiClient;
use crate::error::DashboardResult;
use crate::uploader::MediaUploader;

/// State shared by the dashboard handlers
///
/// Both clients wrap a pooled `reqwest::Client`, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct DashboardState {
    api: ApiClient,
    uploader: MediaUploader,
}

impl DashboardState {
    pub fn new(api: ApiClient, uploader: MediaUploader) -> Self {
        Self { api, uploader }
    }

    pub fn from_config(config: &DashboardConfig) -> DashboardResult<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        Ok(Self::new(
            ApiClient::new(&config.api_base_url, timeout)?,
            MediaUploader::new(&config.upload_url, timeout)?,
        ))
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn uploader(&self) -> &MediaUploader {
        &self.uploader
    }
}
