//! Entity to DTO mappers
//!
//! Display URLs are not part of the entities, so artifacts are mapped together
//! with the URL signed for them.

use feed_core::entities::{Artifact, Post};

use super::responses::{ArtifactResponse, PostResponse};

/// An artifact paired with the URL signed for this response
pub struct SignedArtifact<'a> {
    pub artifact: &'a Artifact,
    pub url: String,
}

impl From<SignedArtifact<'_>> for ArtifactResponse {
    fn from(signed: SignedArtifact<'_>) -> Self {
        Self {
            public_id: signed.artifact.public_id.to_string(),
            url: signed.url,
            content_type: signed.artifact.file_type.clone(),
            thumbnail_url: signed.artifact.thumbnail_url.clone(),
        }
    }
}

/// A post paired with the responses of its signed artifacts
pub struct PostWithArtifacts<'a> {
    pub post: &'a Post,
    pub artifacts: Vec<ArtifactResponse>,
}

impl From<PostWithArtifacts<'_>> for PostResponse {
    fn from(value: PostWithArtifacts<'_>) -> Self {
        let post = value.post;
        Self {
            public_id: post.public_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
            updated_at: post.updated_at,
            artifacts: value.artifacts,
        }
    }
}
