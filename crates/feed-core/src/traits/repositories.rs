//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Artifact, NewArtifact, Post};
use crate::error::DomainError;
use crate::value_objects::PublicId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Total number of posts
    async fn count(&self) -> RepoResult<i64>;

    /// Posts ordered newest first (descending internal id), with artifacts
    async fn find_page(&self, offset: i64, limit: i64) -> RepoResult<Vec<Post>>;

    /// Find a post and its artifacts by public id
    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Post>>;

    /// Insert a post; ids and timestamps are assigned by the store
    async fn create(&self, title: &str, content: &str) -> RepoResult<Post>;

    /// Insert a post together with its artifacts as one unit
    async fn create_with_artifacts(
        &self,
        title: &str,
        content: &str,
        artifacts: &[NewArtifact],
    ) -> RepoResult<Post>;
}

// ============================================================================
// Artifact Repository
// ============================================================================

#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Total number of artifacts
    async fn count(&self) -> RepoResult<i64>;

    /// Find artifact by public id
    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Artifact>>;

    /// Artifacts attached to a post, in insertion order
    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Artifact>>;

    /// Insert one artifact row per entry for the given post
    ///
    /// Each insert commits on its own: a failure part-way leaves the earlier
    /// rows in place.
    async fn create_batch(&self, post_id: i64, artifacts: &[NewArtifact]) -> RepoResult<()>;
}
