//! Axum extractors for request handling
//!
//! Custom extractors that turn axum rejections into [`ApiError`] bodies.
//!
//! [`ApiError`]: crate::response::ApiError

mod path;
mod query;
mod validated;

pub use path::PublicIdPath;
pub use query::ApiQuery;
pub use validated::ValidatedJson;
