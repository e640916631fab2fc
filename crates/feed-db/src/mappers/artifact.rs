//! Artifact entity <-> model mapper

use feed_core::entities::{Artifact, NewArtifact};
use feed_core::value_objects::PublicId;

use crate::models::ArtifactModel;

/// Convert ArtifactModel to Artifact entity
impl From<ArtifactModel> for Artifact {
    fn from(model: ArtifactModel) -> Self {
        Artifact {
            id: model.id,
            public_id: PublicId::from_uuid(model.public_id),
            post_id: model.post_id,
            file_id: model.file_id,
            file_path: model.file_path,
            file_type: model.file_type,
            thumbnail_url: model.thumbnail_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Values bound when inserting one artifact row
pub struct ArtifactInsert<'a> {
    pub post_id: i64,
    pub file_id: &'a str,
    pub file_path: &'a str,
    pub file_type: &'a str,
    pub thumbnail_url: Option<&'a str>,
}

impl<'a> ArtifactInsert<'a> {
    pub fn new(post_id: i64, artifact: &'a NewArtifact) -> Self {
        Self {
            post_id,
            file_id: &artifact.file_id,
            file_path: &artifact.file_path,
            file_type: &artifact.file_type,
            thumbnail_url: artifact.thumbnail_url.as_deref(),
        }
    }
}
