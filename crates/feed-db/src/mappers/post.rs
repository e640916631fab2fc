//! Post entity <-> model mapper

use std::collections::HashMap;

use feed_core::entities::{Artifact, Post};
use feed_core::value_objects::PublicId;

use crate::models::{ArtifactModel, PostModel};

/// Convert PostModel to Post entity (artifacts not loaded)
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: model.id,
            public_id: PublicId::from_uuid(model.public_id),
            title: model.title,
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
            artifacts: Vec::new(),
        }
    }
}

/// Values bound when inserting a post row
pub struct PostInsert<'a> {
    pub title: &'a str,
    pub content: &'a str,
}

impl<'a> PostInsert<'a> {
    pub fn new(title: &'a str, content: &'a str) -> Self {
        Self { title, content }
    }
}

/// Attach batch-loaded artifact rows to their posts, preserving post order
///
/// Artifacts keep the order they were loaded in (ascending id), so each post
/// lists its media in upload order.
pub fn assemble_posts(posts: Vec<PostModel>, artifacts: Vec<ArtifactModel>) -> Vec<Post> {
    let mut by_post: HashMap<i64, Vec<Artifact>> = HashMap::new();
    for model in artifacts {
        by_post
            .entry(model.post_id)
            .or_default()
            .push(Artifact::from(model));
    }

    posts
        .into_iter()
        .map(|model| {
            let owned = by_post.remove(&model.id).unwrap_or_default();
            Post::from(model).with_artifacts(owned)
        })
        .collect()
}
