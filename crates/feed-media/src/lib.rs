//! # feed-media
//!
//! Brokers access to the external media host. File bytes never pass through
//! the backend: clients upload with short-lived credentials issued here, and
//! display URLs are signed here on every read.

mod error;
mod imagekit;

pub use error::{MediaError, MediaResult};
pub use imagekit::{ImageKitBroker, UPLOAD_TOKEN_TTL_SECS};
