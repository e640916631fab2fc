//! Path parameter extractors
//!
//! Type-safe extraction of public ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use feed_core::{DomainError, PublicId};

use crate::response::ApiError;

/// Extract a single public id from the path (`/posts/:public_id`)
///
/// Malformed ids are rejected with 400 before any lookup happens.
#[derive(Debug, Clone, Copy)]
pub struct PublicIdPath(pub PublicId);

#[async_trait]
impl<S> FromRequestParts<S> for PublicIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.to_string()))?;

        let id = PublicId::parse(&raw).map_err(|_| DomainError::InvalidPublicId(raw))?;

        Ok(PublicIdPath(id))
    }
}
