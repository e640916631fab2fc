//! Artifact database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for artifacts table
#[derive(Debug, Clone, FromRow)]
pub struct ArtifactModel {
    pub id: i64,
    pub public_id: Uuid,
    pub post_id: i64,
    pub file_id: String,
    pub file_path: String,
    pub file_type: String,
    pub thumbnail_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

