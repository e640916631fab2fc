//! Share workflow: upload every picked file, then create the post
//!
//! Files are handled strictly one after another. Each gets its own fresh
//! credentials because upload tokens are single-use. The first failure aborts
//! the whole share; files already on the media host are left there.

use feed_service::dto::PostResponse;
use tracing::{info, instrument};

use crate::client::{ApiClient, NewPost, NewPostArtifact};
use crate::error::{DashboardError, DashboardResult};
use crate::uploader::{MediaUploader, UploadFile};

/// Contents of the share form
#[derive(Debug, Clone, Default)]
pub struct ShareForm {
    pub title: String,
    pub caption: String,
    pub files: Vec<UploadFile>,
}

impl ShareForm {
    pub fn validate(&self) -> DashboardResult<()> {
        if self.title.trim().is_empty() {
            return Err(DashboardError::form("Please enter a title."));
        }
        if self.caption.trim().is_empty() && self.files.is_empty() {
            return Err(DashboardError::form(
                "Please add a caption or upload at least one file.",
            ));
        }
        if let Some(file) = self.files.iter().find(|f| !f.has_allowed_extension()) {
            return Err(DashboardError::form(format!(
                "Unsupported file type: {}",
                file.file_name
            )));
        }
        Ok(())
    }
}

/// Validate the form, upload its files in order and create the post
#[instrument(skip_all, fields(files = form.files.len()))]
pub async fn share(
    api: &ApiClient,
    uploader: &MediaUploader,
    form: ShareForm,
) -> DashboardResult<PostResponse> {
    form.validate()?;

    let mut artifacts: Vec<NewPostArtifact> = Vec::with_capacity(form.files.len());
    for file in &form.files {
        let credentials = api.upload_auth_params().await?;
        let uploaded = uploader.upload(file, &credentials).await?;
        artifacts.push(uploaded.into());
    }

    let post = api
        .create_post(&NewPost {
            title: form.title,
            content: form.caption,
            artifacts,
        })
        .await?;

    info!(public_id = %post.public_id, "Post shared");
    Ok(post)
}
