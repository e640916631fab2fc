//! Service context - dependency container for services
//!
//! Holds the repositories and the media broker needed by services.

use std::sync::Arc;

use feed_core::traits::{ArtifactRepository, MediaBroker, PostRepository};
use feed_core::DEFAULT_SIGNED_URL_EXPIRY_SECS;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cheap to clone; every dependency sits behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    post_repo: Arc<dyn PostRepository>,
    artifact_repo: Arc<dyn ArtifactRepository>,

    // Media host
    media: Arc<dyn MediaBroker>,
    signed_url_expiry_secs: u64,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        post_repo: Arc<dyn PostRepository>,
        artifact_repo: Arc<dyn ArtifactRepository>,
        media: Arc<dyn MediaBroker>,
        signed_url_expiry_secs: u64,
    ) -> Self {
        Self {
            post_repo,
            artifact_repo,
            media,
            signed_url_expiry_secs,
        }
    }

    // === Repositories ===

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the artifact repository
    pub fn artifact_repo(&self) -> &dyn ArtifactRepository {
        self.artifact_repo.as_ref()
    }

    // === Media ===

    /// Get the media broker
    pub fn media(&self) -> &dyn MediaBroker {
        self.media.as_ref()
    }

    /// Lifetime of display URLs attached to post responses
    pub fn signed_url_expiry_secs(&self) -> u64 {
        self.signed_url_expiry_secs
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("media", &"...")
            .field("signed_url_expiry_secs", &self.signed_url_expiry_secs)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    artifact_repo: Option<Arc<dyn ArtifactRepository>>,
    media: Option<Arc<dyn MediaBroker>>,
    signed_url_expiry_secs: u64,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            post_repo: None,
            artifact_repo: None,
            media: None,
            signed_url_expiry_secs: DEFAULT_SIGNED_URL_EXPIRY_SECS,
        }
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn artifact_repo(mut self, repo: Arc<dyn ArtifactRepository>) -> Self {
        self.artifact_repo = Some(repo);
        self
    }

    pub fn media(mut self, media: Arc<dyn MediaBroker>) -> Self {
        self.media = Some(media);
        self
    }

    pub fn signed_url_expiry_secs(mut self, secs: u64) -> Self {
        self.signed_url_expiry_secs = secs;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        if self.signed_url_expiry_secs == 0 {
            return Err(ServiceError::validation(
                "signed_url_expiry_secs must be positive",
            ));
        }

        Ok(ServiceContext::new(
            self.post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            self.artifact_repo
                .ok_or_else(|| ServiceError::validation("artifact_repo is required"))?,
            self.media
                .ok_or_else(|| ServiceError::validation("media is required"))?,
            self.signed_url_expiry_secs,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
