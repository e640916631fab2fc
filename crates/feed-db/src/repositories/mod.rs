//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feed-core.

mod artifact;
mod error;
mod post;

pub use artifact::PgArtifactRepository;
pub use error::map_db_error;
pub use post::PgPostRepository;
