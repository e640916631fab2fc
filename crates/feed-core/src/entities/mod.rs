//! Domain entities - core business objects

mod artifact;
mod post;

pub use artifact::{Artifact, ArtifactKind, NewArtifact};
pub use post::Post;
