//! # feed-core
//!
//! Domain layer containing entities, value objects, repository traits, and the
//! media broker port. This crate has zero dependencies on infrastructure
//! (database, web framework, media host SDKs).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Artifact, ArtifactKind, NewArtifact, Post};
pub use error::DomainError;
pub use traits::{
    ArtifactRepository, MediaBroker, PostRepository, RepoResult, UploadCredentials,
    DEFAULT_SIGNED_URL_EXPIRY_SECS,
};
pub use value_objects::{
    total_pages, PageRequest, PageWindow, PublicId, PublicIdParseError, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
