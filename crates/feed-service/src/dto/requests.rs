//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use feed_core::entities::NewArtifact;

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
///
/// A post needs a title, plus a body or at least one media artifact.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_post_body", skip_on_field_errors = false))]
pub struct CreatePostRequest {
    #[validate(
        length(max = 200, message = "Title must be at most 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[serde(default)]
    #[validate(
        length(max = 10000, message = "Content must be at most 10000 characters"),
        custom(function = "validate_no_nul", message = "Content must not contain NUL characters")
    )]
    pub content: String,

    /// Media already uploaded to the media host
    #[serde(default)]
    #[validate(nested)]
    pub artifacts: Vec<CreateArtifactRequest>,
}

impl CreatePostRequest {
    /// Artifact rows for the repository layer
    pub fn new_artifacts(&self) -> Vec<NewArtifact> {
        self.artifacts.iter().map(NewArtifact::from).collect()
    }
}

/// Media file reported by the media host after a direct upload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_thumbnail_url", skip_on_field_errors = false))]
pub struct CreateArtifactRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_no_nul", message = "file_id must not contain NUL characters"))]
    pub file_id: String,

    /// Path inside the media host namespace, e.g. `/uploads/cat.jpg`
    #[validate(custom(function = "validate_not_blank"))]
    pub file_path: String,

    /// "image", "video" or the media host's "non-image"
    #[validate(custom(function = "validate_not_blank"))]
    pub file_type: String,

    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl From<&CreateArtifactRequest> for NewArtifact {
    fn from(req: &CreateArtifactRequest) -> Self {
        Self {
            file_id: req.file_id.trim().to_string(),
            file_path: req.file_path.trim().to_string(),
            file_type: req.file_type.trim().to_string(),
            thumbnail_url: req
                .thumbnail_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(String::from),
        }
    }
}

/// Postgres text columns cannot store U+0000
fn validate_no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_character"));
    }
    Ok(())
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Must not be blank".into());
        return Err(err);
    }
    validate_no_nul(value).map_err(|mut err| {
        err.message = Some("Must not contain NUL characters".into());
        err
    })
}

fn validate_thumbnail_url(req: &CreateArtifactRequest) -> Result<(), ValidationError> {
    match req.thumbnail_url.as_deref() {
        Some(url) => validate_no_nul(url).map_err(|mut err| {
            err.message = Some("thumbnail_url must not contain NUL characters".into());
            err
        }),
        None => Ok(()),
    }
}

fn validate_post_body(req: &CreatePostRequest) -> Result<(), ValidationError> {
    if req.content.trim().is_empty() && req.artifacts.is_empty() {
        let mut err = ValidationError::new("empty_post");
        err.message = Some("Content or at least one artifact is required".into());
        return Err(err);
    }
    Ok(())
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Feed pagination query (`?page=&page_size=`)
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListQuery {
    /// 1-based page number (default 1)
    pub page: Option<i64>,
    /// Posts per page (default 5, at most 100)
    pub page_size: Option<i64>,
}

/// Ad-hoc signed URL query (`?file_path=&expire_seconds=`)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SignedUrlQuery {
    /// Path inside the media host namespace
    pub file_path: String,
    /// URL lifetime in seconds (default 600)
    pub expire_seconds: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact(path: &str) -> CreateArtifactRequest {
        CreateArtifactRequest {
            file_id: "abc".to_string(),
            file_path: path.to_string(),
            file_type: "image".to_string(),
            thumbnail_url: None,
        }
    }

    fn request(title: &str, content: &str, artifacts: Vec<CreateArtifactRequest>) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            artifacts,
        }
    }

    #[test]
    fn test_valid_text_post() {
        assert!(request("Hello", "World", vec![]).validate().is_ok());
    }

    #[test]
    fn test_valid_media_only_post() {
        assert!(request("Holiday", "", vec![artifact("/a.jpg")]).validate().is_ok());
    }

    #[test]
    fn test_blank_title_rejected() {
        let errors = request("   ", "World", vec![]).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn test_empty_post_rejected() {
        let errors = request("Hello", "  ", vec![]).validate().unwrap_err();
        let field_errors = errors.field_errors();
        let schema_errors = field_errors["__all__"];
        assert_eq!(schema_errors[0].code, "empty_post");
    }

    #[test]
    fn test_blank_artifact_path_rejected() {
        let result = request("Hello", "", vec![artifact(" ")]).validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_nul_characters_rejected() {
        let errors = request("Hel\0lo", "World", vec![]).validate().unwrap_err();
        assert_eq!(errors.field_errors()["title"][0].code, "nul_character");

        let errors = request("Hello", "Wor\0ld", vec![]).validate().unwrap_err();
        assert_eq!(errors.field_errors()["content"][0].code, "nul_character");

        assert!(request("Hello", "", vec![artifact("/b\0.png")]).validate().is_err());

        let mut entry = artifact("/a.jpg");
        entry.thumbnail_url = Some("https://ik.imagekit.io/demo/\0".to_string());
        assert!(request("Hello", "", vec![entry]).validate().is_err());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let req: CreatePostRequest =
            serde_json::from_str(r#"{"title":"Hello","content":"World"}"#).unwrap();
        assert!(req.artifacts.is_empty());

        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title":"Hi","artifacts":[{"file_path":"/x.mp4","file_type":"non-image"}]}"#,
        )
        .unwrap();
        assert_eq!(req.content, "");
        assert_eq!(req.artifacts[0].file_id, "");
    }

    #[test]
    fn test_new_artifacts_trims_and_drops_empty_thumbnail() {
        let mut entry = artifact(" /a.jpg ");
        entry.thumbnail_url = Some(String::new());
        let req = request("Hello", "", vec![entry]);

        let artifacts = req.new_artifacts();
        assert_eq!(artifacts[0].file_path, "/a.jpg");
        assert!(artifacts[0].thumbnail_url.is_none());
    }
}
