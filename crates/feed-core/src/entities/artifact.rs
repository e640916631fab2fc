//! Artifact entity - a media file attached to a post

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::PublicId;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "webm"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Artifact entity
///
/// Only `file_path` is durable. Display URLs are signed from it on every read
/// and are never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub id: i64,
    pub public_id: PublicId,
    pub post_id: i64,
    pub file_id: String,
    pub file_path: String,
    pub file_type: String,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Artifact {
    /// Rendering classification of this artifact
    pub fn kind(&self) -> ArtifactKind {
        ArtifactKind::classify(&self.file_type, &self.file_path)
    }
}

/// Values needed to insert an artifact, as reported by the media host upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtifact {
    pub file_id: String,
    pub file_path: String,
    pub file_type: String,
    pub thumbnail_url: Option<String>,
}

/// Media classification used by the frontend to pick a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Image,
    Video,
    Other,
}

impl ArtifactKind {
    /// Classify from the stored file type, falling back to the path extension
    ///
    /// The media host reports videos as the generic "non-image" type, so the
    /// extension decides in that case.
    pub fn classify(file_type: &str, file_path: &str) -> Self {
        match file_type.trim().to_ascii_lowercase().as_str() {
            "image" => Self::Image,
            "video" => Self::Video,
            _ => Self::from_extension(file_path),
        }
    }

    fn from_extension(file_path: &str) -> Self {
        let ext = file_path
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Self::Video
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Other => "other",
        }
    }
}
