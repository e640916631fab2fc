//! Health checks

use feed_core::traits::RepoResult;
use tracing::{instrument, warn};

use crate::dto::{HealthResponse, ReadinessResponse};

use super::context::ServiceContext;

/// Health service
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub fn liveness(&self) -> HealthResponse {
        HealthResponse::healthy()
    }

    /// Ready when both the post and artifact stores answer a count query
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let counts = match self.store_counts().await {
            Ok(counts) => Some(counts),
            Err(e) => {
                warn!(error = %e, "Database readiness check failed");
                None
            }
        };

        ReadinessResponse::ready(counts)
    }

    async fn store_counts(&self) -> RepoResult<(i64, i64)> {
        let posts = self.ctx.post_repo().count().await?;
        let artifacts = self.ctx.artifact_repo().count().await?;
        Ok((posts, artifacts))
    }
}
