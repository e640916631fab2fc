//! Database models - SQLx-compatible structs for PostgreSQL tables

mod artifact;
mod post;

pub use artifact::ArtifactModel;
pub use post::PostModel;
