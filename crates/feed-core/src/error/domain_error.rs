//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Page {page} not found (total pages: {total_pages})")]
    PageNotFound { page: i64, total_pages: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid page size {page_size}: must be between 1 and {max}")]
    InvalidPageSize { page_size: i64, max: i64 },

    #[error("Invalid public id: {0}")]
    InvalidPublicId(String),

    // =========================================================================
    // Upstream Errors (external media host)
    // =========================================================================
    #[error("Media host error: {0}")]
    UpstreamError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Post creation failed")]
    PostCreationFailed,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::ArtifactNotFound(_) => "UNKNOWN_ARTIFACT",
            Self::PageNotFound { .. } => "PAGE_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPageSize { .. } => "INVALID_PAGE_SIZE",
            Self::InvalidPublicId(_) => "INVALID_PUBLIC_ID",

            // Upstream
            Self::UpstreamError(_) => "MEDIA_HOST_ERROR",

            // Infrastructure
            Self::PostCreationFailed => "POST_CREATION_FAILED",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::ArtifactNotFound(_) | Self::PageNotFound { .. }
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPageSize { .. } | Self::InvalidPublicId(_)
        )
    }

    /// Check if the external media host caused this error
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamError(_))
    }
}
