//! Response DTOs for API endpoints
//!
//! Only public identifiers appear here; internal row ids stay in the
//! persistence layer. Responses also derive `Deserialize` so HTTP clients
//! (the dashboard, end-to-end tests) share the same contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use feed_core::UploadCredentials;

/// Greeting returned by `GET /`
pub const WELCOME_MESSAGE: &str = "Welcome to my Application";

// ============================================================================
// Post Responses
// ============================================================================

/// Media attached to a post, with a freshly signed display URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArtifactResponse {
    pub public_id: String,
    /// Signed, time-limited URL; regenerated on every read
    pub url: String,
    /// Stored file type ("image", "video", "non-image", ...)
    pub content_type: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

/// A post with its artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub public_id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub artifacts: Vec<ArtifactResponse>,
}

/// One page of the newest-first feed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageResponse {
    /// Total number of posts in the feed
    pub no_of_posts: i64,
    pub posts: Vec<PostResponse>,
    pub current_page: i64,
    pub total_pages: i64,
    pub page_size: i64,
}

// ============================================================================
// Media Responses
// ============================================================================

/// Credentials for one direct upload to the media host
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadAuthResponse {
    pub public_key: String,
    pub token: String,
    /// Unix timestamp (seconds)
    pub expire: i64,
    pub signature: String,
}

impl From<UploadCredentials> for UploadAuthResponse {
    fn from(creds: UploadCredentials) -> Self {
        Self {
            public_key: creds.public_key,
            token: creds.token,
            expire: creds.expire,
            signature: creds.signature,
        }
    }
}

// ============================================================================
// Misc Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthChecks {
    pub database: String,
    /// Rows in the posts table, when the database answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<i64>,
    /// Rows in the artifacts table, when the database answered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<i64>,
}

impl ReadinessResponse {
    /// Build from the `(posts, artifacts)` row counts; `None` means unreachable
    pub fn ready(counts: Option<(i64, i64)>) -> Self {
        let healthy = counts.is_some();
        Self {
            status: if healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if healthy { "healthy" } else { "unhealthy" }.to_string(),
                posts: counts.map(|(posts, _)| posts),
                artifacts: counts.map(|(_, artifacts)| artifacts),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
