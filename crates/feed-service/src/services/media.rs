//! Media service
//!
//! Thin use-case layer over the media broker: upload credentials for the
//! dashboard and ad-hoc signed URLs.

use tracing::instrument;

use crate::dto::{SignedUrlQuery, UploadAuthResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Media service
pub struct MediaService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MediaService<'a> {
    /// Create a new MediaService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Fresh single-use credentials for one direct upload
    #[instrument(skip(self))]
    pub fn upload_credentials(&self) -> ServiceResult<UploadAuthResponse> {
        let credentials = self.ctx.media().upload_credentials()?;
        Ok(credentials.into())
    }

    /// Sign a display URL for a stored file path
    #[instrument(skip(self))]
    pub fn signed_url(&self, query: SignedUrlQuery) -> ServiceResult<String> {
        let file_path = query.file_path.trim();
        if file_path.trim_start_matches('/').is_empty() {
            return Err(ServiceError::validation("file_path must not be empty"));
        }

        let expiry = match query.expire_seconds {
            Some(0) => return Err(ServiceError::validation("expire_seconds must be positive")),
            Some(secs) => secs,
            None => self.ctx.signed_url_expiry_secs(),
        };

        Ok(self.ctx.media().sign_url(file_path, expiry)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::test_context;

    fn query(path: &str, expire_seconds: Option<u64>) -> SignedUrlQuery {
        SignedUrlQuery {
            file_path: path.to_string(),
            expire_seconds,
        }
    }

    #[test]
    fn test_upload_credentials() {
        let (ctx, _) = test_context();
        let service = MediaService::new(&ctx);

        let a = service.upload_credentials().unwrap();
        let b = service.upload_credentials().unwrap();
        assert_eq!(a.public_key, "public_test");
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn test_signed_url_uses_default_expiry() {
        let (ctx, _) = test_context();
        let url = MediaService::new(&ctx)
            .signed_url(query("/cat.jpg", None))
            .unwrap();
        assert!(url.contains("cat.jpg"));
        assert!(url.contains("exp=600"));
    }

    #[test]
    fn test_signed_url_custom_expiry() {
        let (ctx, _) = test_context();
        let url = MediaService::new(&ctx)
            .signed_url(query("cat.jpg", Some(60)))
            .unwrap();
        assert!(url.contains("exp=60&"));
    }

    #[test]
    fn test_signed_url_rejects_empty_path() {
        let (ctx, _) = test_context();
        let service = MediaService::new(&ctx);

        for path in ["", "   ", "/"] {
            let err = service.signed_url(query(path, None)).unwrap_err();
            assert_eq!(err.status_code(), 400, "path {path:?}");
        }
    }

    #[test]
    fn test_signed_url_rejects_zero_expiry() {
        let (ctx, _) = test_context();
        let err = MediaService::new(&ctx)
            .signed_url(query("cat.jpg", Some(0)))
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
