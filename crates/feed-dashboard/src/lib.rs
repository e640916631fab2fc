//! # feed-dashboard
//!
//! Server-rendered HTML frontend for the feed API. It browses the paginated
//! feed and shares new posts, uploading media straight to the media host with
//! credentials fetched from the API for every file.

pub mod client;
pub mod error;
pub mod handlers;
pub mod publish;
pub mod render;
pub mod server;
pub mod state;
pub mod uploader;

pub use client::ApiClient;
pub use error::{DashboardError, DashboardResult};
pub use server::{create_app, run};
pub use state::DashboardState;
pub use uploader::MediaUploader;
