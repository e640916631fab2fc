//! Post entity - a feed entry with optional media artifacts

use chrono::{DateTime, Utc};

use super::artifact::Artifact;
use crate::value_objects::PublicId;

/// Post entity
///
/// `id` is the sequential database key. It orders the feed and links
/// artifacts, but must never be serialized to clients; use `public_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub public_id: PublicId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub artifacts: Vec<Artifact>,
}

impl Post {
    /// Check if any media is attached
    #[inline]
    pub fn has_artifacts(&self) -> bool {
        !self.artifacts.is_empty()
    }

    /// Check if the post body is blank
    #[inline]
    pub fn is_content_empty(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// Attach loaded artifacts, keeping only those owned by this post
    pub fn with_artifacts(mut self, artifacts: impl IntoIterator<Item = Artifact>) -> Self {
        let id = self.id;
        self.artifacts
            .extend(artifacts.into_iter().filter(|a| a.post_id == id));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64) -> Post {
        Post {
            id,
            public_id: PublicId::generate(),
            title: "Hello".to_string(),
            content: "World".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            artifacts: vec![],
        }
    }

    fn artifact(id: i64, post_id: i64) -> Artifact {
        Artifact {
            id,
            public_id: PublicId::generate(),
            post_id,
            file_id: format!("file-{id}"),
            file_path: format!("/uploads/{id}.jpg"),
            file_type: "image".to_string(),
            thumbnail_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_post_without_artifacts() {
        let p = post(1);
        assert!(!p.has_artifacts());
        assert!(!p.is_content_empty());
    }

    #[test]
    fn test_with_artifacts_filters_by_owner() {
        let p = post(7).with_artifacts(vec![artifact(1, 7), artifact(2, 8), artifact(3, 7)]);
        assert_eq!(p.artifacts.len(), 2);
        assert!(p.artifacts.iter().all(|a| a.post_id == 7));
    }
}
