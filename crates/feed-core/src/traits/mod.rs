//! Ports implemented by the infrastructure crates

mod media;
mod repositories;

pub use media::{MediaBroker, UploadCredentials, DEFAULT_SIGNED_URL_EXPIRY_SECS};
pub use repositories::{ArtifactRepository, PostRepository, RepoResult};
