//! Test fixtures and data generators
//!
//! Request bodies are built here; responses decode into the API's own DTOs.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

pub use feed_service::dto::{
    ArtifactResponse, PostPageResponse, PostResponse, UploadAuthResponse, WelcomeResponse,
};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Create post request
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub artifacts: Vec<CreateArtifactRequest>,
}

impl CreatePostRequest {
    pub fn text(title: &str, content: &str) -> Self {
        Self {
            title: title.to_string(),
            content: content.to_string(),
            artifacts: Vec::new(),
        }
    }

    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self::text(&format!("Post {suffix}"), &format!("Content {suffix}"))
    }

    pub fn with_artifact(mut self, artifact: CreateArtifactRequest) -> Self {
        self.artifacts.push(artifact);
        self
    }
}

/// Artifact as reported by the media host after an upload
#[derive(Debug, Serialize)]
pub struct CreateArtifactRequest {
    pub file_id: String,
    pub file_path: String,
    pub file_type: String,
    pub thumbnail_url: Option<String>,
}

impl CreateArtifactRequest {
    pub fn image(name: &str) -> Self {
        Self {
            file_id: format!("file_{}", unique_suffix()),
            file_path: format!("/uploads/{name}"),
            file_type: "image".to_string(),
            thumbnail_url: None,
        }
    }

    pub fn video(name: &str) -> Self {
        Self {
            file_id: format!("file_{}", unique_suffix()),
            file_path: format!("/uploads/{name}"),
            file_type: "non-image".to_string(),
            thumbnail_url: Some(format!("https://ik.imagekit.io/integration/tr:n-thumb/{name}")),
        }
    }
}
