//! # feed-service
//!
//! Application layer containing the feed use cases, services, and DTOs.

pub mod dto;
pub mod services;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use services::{
    HealthService, MediaService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
