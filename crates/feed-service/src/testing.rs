//! In-memory repositories and media broker
//!
//! Used by the unit tests of this crate and, through the `testing` feature,
//! by the router tests of the API crate.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use feed_core::entities::{Artifact, NewArtifact, Post};
use feed_core::traits::{ArtifactRepository, MediaBroker, PostRepository, RepoResult};
use feed_core::{DomainError, PublicId, UploadCredentials};

use crate::services::{ServiceContext, ServiceContextBuilder};

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    artifacts: Vec<Artifact>,
    next_post_id: i64,
    next_artifact_id: i64,
}

impl State {
    fn insert_post(&mut self, title: &str, content: &str) -> Post {
        self.next_post_id += 1;
        let now = Utc::now();
        let post = Post {
            id: self.next_post_id,
            public_id: PublicId::generate(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
            artifacts: Vec::new(),
        };
        self.posts.push(post.clone());
        post
    }

    fn insert_artifact(&mut self, post_id: i64, new_artifact: &NewArtifact) -> Artifact {
        self.next_artifact_id += 1;
        let now = Utc::now();
        let artifact = Artifact {
            id: self.next_artifact_id,
            public_id: PublicId::generate(),
            post_id,
            file_id: new_artifact.file_id.clone(),
            file_path: new_artifact.file_path.clone(),
            file_type: new_artifact.file_type.clone(),
            thumbnail_url: new_artifact.thumbnail_url.clone(),
            created_at: now,
            updated_at: now,
        };
        self.artifacts.push(artifact.clone());
        artifact
    }

    fn with_artifacts(&self, post: &Post) -> Post {
        post.clone().with_artifacts(self.artifacts.iter().cloned())
    }
}

/// Post and artifact store backed by a mutex-guarded vector
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    hide_created: AtomicBool,
    fail_reads: AtomicBool,
}

impl InMemoryStore {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make public-id lookups miss, as if the row vanished after insert
    pub fn hide_created_posts(&self, hide: bool) {
        self.hide_created.store(hide, Ordering::SeqCst);
    }

    /// Make every read fail with a database error
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_reads(&self) -> RepoResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn count(&self) -> RepoResult<i64> {
        self.check_reads()?;
        Ok(self.state().posts.len() as i64)
    }

    async fn find_page(&self, offset: i64, limit: i64) -> RepoResult<Vec<Post>> {
        self.check_reads()?;
        let state = self.state();
        let mut posts: Vec<&Post> = state.posts.iter().collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(posts
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|post| state.with_artifacts(post))
            .collect())
    }

    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Post>> {
        self.check_reads()?;
        if self.hide_created.load(Ordering::SeqCst) {
            return Ok(None);
        }
        let state = self.state();
        Ok(state
            .posts
            .iter()
            .find(|post| post.public_id == public_id)
            .map(|post| state.with_artifacts(post)))
    }

    async fn create(&self, title: &str, content: &str) -> RepoResult<Post> {
        Ok(self.state().insert_post(title, content))
    }

    async fn create_with_artifacts(
        &self,
        title: &str,
        content: &str,
        artifacts: &[NewArtifact],
    ) -> RepoResult<Post> {
        let mut state = self.state();
        let post = state.insert_post(title, content);
        let created: Vec<Artifact> = artifacts
            .iter()
            .map(|new_artifact| state.insert_artifact(post.id, new_artifact))
            .collect();
        Ok(post.with_artifacts(created))
    }
}

#[async_trait]
impl ArtifactRepository for InMemoryStore {
    async fn count(&self) -> RepoResult<i64> {
        self.check_reads()?;
        Ok(self.state().artifacts.len() as i64)
    }

    async fn find_by_public_id(&self, public_id: PublicId) -> RepoResult<Option<Artifact>> {
        self.check_reads()?;
        Ok(self
            .state()
            .artifacts
            .iter()
            .find(|a| a.public_id == public_id)
            .cloned())
    }

    async fn find_by_post(&self, post_id: i64) -> RepoResult<Vec<Artifact>> {
        self.check_reads()?;
        Ok(self
            .state()
            .artifacts
            .iter()
            .filter(|a| a.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create_batch(&self, post_id: i64, artifacts: &[NewArtifact]) -> RepoResult<()> {
        let mut state = self.state();
        for new_artifact in artifacts {
            state.insert_artifact(post_id, new_artifact);
        }
        Ok(())
    }
}

/// Media broker that signs with a tick counter instead of the clock
///
/// Every call advances the counter, so two signatures for the same path never
/// match, the way real signatures drift with time.
#[derive(Default)]
pub struct FakeMediaBroker {
    tick: AtomicU64,
    failing: bool,
}

impl FakeMediaBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A broker whose every call fails as if the media host were unreachable
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn next_tick(&self) -> Result<u64, DomainError> {
        if self.failing {
            return Err(DomainError::UpstreamError("media host unavailable".to_string()));
        }
        Ok(self.tick.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

impl MediaBroker for FakeMediaBroker {
    fn upload_credentials(&self) -> Result<UploadCredentials, DomainError> {
        let tick = self.next_tick()?;
        Ok(UploadCredentials {
            public_key: "public_test".to_string(),
            token: format!("token-{tick}"),
            expire: 1_700_000_000 + tick as i64,
            signature: format!("signature-{tick}"),
        })
    }

    fn sign_url(&self, file_path: &str, expiry_seconds: u64) -> Result<String, DomainError> {
        let tick = self.next_tick()?;
        let path = file_path.trim_start_matches('/');
        Ok(format!(
            "https://media.test/{path}?exp={expiry_seconds}&ik-t={tick}&ik-s=sig{tick}"
        ))
    }
}

/// Service context over a fresh in-memory store and fake broker
pub fn test_context() -> (ServiceContext, Arc<InMemoryStore>) {
    let store = InMemoryStore::shared();
    let ctx = ServiceContextBuilder::new()
        .post_repo(store.clone())
        .artifact_repo(store.clone())
        .media(Arc::new(FakeMediaBroker::new()))
        .build()
        .unwrap_or_else(|e| panic!("test context: {e}"));
    (ctx, store)
}
