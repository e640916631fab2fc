//! Post service
//!
//! Handles the paginated feed, single-post lookups and post creation. Every
//! artifact returned to a client carries a display URL signed on the spot
//! from its stored file path.

use tracing::{info, instrument, warn};

use feed_core::entities::Post;
use feed_core::{DomainError, PageRequest, PublicId};

use crate::dto::{
    ArtifactResponse, CreatePostRequest, PostListQuery, PostPageResponse, PostResponse,
    PostWithArtifacts, SignedArtifact,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of the feed, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self, query: PostListQuery) -> ServiceResult<PostPageResponse> {
        let request = PageRequest::new(query.page, query.page_size);

        let total = self.ctx.post_repo().count().await?;
        let window = request.resolve(total)?;

        let posts = if window.is_empty() {
            Vec::new()
        } else {
            self.ctx
                .post_repo()
                .find_page(window.offset(), window.limit())
                .await?
        };

        let posts = posts
            .iter()
            .map(|post| self.to_response(post))
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(PostPageResponse {
            no_of_posts: window.total_count,
            posts,
            current_page: window.page,
            total_pages: window.total_pages,
            page_size: window.page_size,
        })
    }

    /// Get a post by its public id
    #[instrument(skip(self))]
    pub async fn get_post(&self, public_id: PublicId) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| ServiceError::from(DomainError::PostNotFound(public_id.to_string())))?;

        self.to_response(&post)
    }

    /// Create a post and its artifacts, then read it back
    ///
    /// The post and all artifacts are written in one transaction. The
    /// response comes from a fresh read so it reflects what was stored.
    #[instrument(skip(self, request), fields(artifact_count = request.artifacts.len()))]
    pub async fn create_post(&self, request: CreatePostRequest) -> ServiceResult<PostResponse> {
        let title = request.title.trim();
        let artifacts = request.new_artifacts();

        let created = if artifacts.is_empty() {
            self.ctx.post_repo().create(title, &request.content).await?
        } else {
            self.ctx
                .post_repo()
                .create_with_artifacts(title, &request.content, &artifacts)
                .await?
        };

        let Some(stored) = self
            .ctx
            .post_repo()
            .find_by_public_id(created.public_id)
            .await?
        else {
            warn!(public_id = %created.public_id, "Created post could not be read back");
            return Err(DomainError::PostCreationFailed.into());
        };

        info!(
            public_id = %stored.public_id,
            artifacts = stored.artifacts.len(),
            "Post created"
        );

        self.to_response(&stored)
    }

    /// Map a post to its response, signing every artifact URL
    fn to_response(&self, post: &Post) -> ServiceResult<PostResponse> {
        let expiry = self.ctx.signed_url_expiry_secs();

        let artifacts = post
            .artifacts
            .iter()
            .map(|artifact| -> ServiceResult<ArtifactResponse> {
                let url = self.ctx.media().sign_url(&artifact.file_path, expiry)?;
                Ok(SignedArtifact { artifact, url }.into())
            })
            .collect::<ServiceResult<Vec<_>>>()?;

        Ok(PostWithArtifacts { post, artifacts }.into())
    }
}
