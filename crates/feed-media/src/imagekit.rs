//! ImageKit URL and upload signing
//!
//! ImageKit authenticates both client-side uploads and private delivery URLs
//! with an HMAC-SHA1 over a short payload, keyed by the account's private key.
//!
//! - Upload: `signature = hex(hmac(private_key, token + expire))`
//! - Delivery: `signature = hex(hmac(private_key, path_after_endpoint + expiry))`,
//!   appended as `ik-t` (expiry) and `ik-s` (signature) query parameters.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use tracing::{debug, instrument};
use uuid::Uuid;

use feed_common::MediaConfig;
use feed_core::{DomainError, MediaBroker, UploadCredentials};

use crate::error::{MediaError, MediaResult};

type HmacSha1 = Hmac<Sha1>;

/// Lifetime of upload credentials, in seconds
pub const UPLOAD_TOKEN_TTL_SECS: i64 = 1800;

/// Media broker for an ImageKit account
///
/// Built from an explicit [`MediaConfig`]; holds no global client state.
#[derive(Clone)]
pub struct ImageKitBroker {
    private_key: String,
    public_key: String,
    url_endpoint: String,
}

impl ImageKitBroker {
    /// Create a broker, rejecting blank keys or endpoint
    pub fn new(config: &MediaConfig) -> MediaResult<Self> {
        if config.private_key.trim().is_empty() {
            return Err(MediaError::NotConfigured("private key"));
        }
        if config.public_key.trim().is_empty() {
            return Err(MediaError::NotConfigured("public key"));
        }
        let url_endpoint = config.url_endpoint.trim().trim_end_matches('/');
        if url_endpoint.is_empty() {
            return Err(MediaError::NotConfigured("url endpoint"));
        }

        Ok(Self {
            private_key: config.private_key.clone(),
            public_key: config.public_key.clone(),
            url_endpoint: url_endpoint.to_string(),
        })
    }

    /// Delivery endpoint without trailing slash
    pub fn url_endpoint(&self) -> &str {
        &self.url_endpoint
    }

    /// Upload credentials for a given token, issued at `now` (unix seconds)
    pub fn credentials_at(&self, token: &str, now: i64) -> MediaResult<UploadCredentials> {
        let expire = now + UPLOAD_TOKEN_TTL_SECS;
        let signature = self.sign(&format!("{token}{expire}"))?;

        Ok(UploadCredentials {
            public_key: self.public_key.clone(),
            token: token.to_string(),
            expire,
            signature,
        })
    }

    /// Signed delivery URL for `file_path`, as seen at `now` (unix seconds)
    pub fn sign_url_at(&self, file_path: &str, expiry_seconds: u64, now: i64) -> MediaResult<String> {
        let path = file_path.trim().trim_start_matches('/');
        if path.is_empty() {
            return Err(MediaError::EmptyPath);
        }

        let url = format!("{}/{}", self.url_endpoint, path);
        let expiry = now.saturating_add(i64::try_from(expiry_seconds).unwrap_or(i64::MAX));

        // Everything after "<endpoint>/" is signed, query string included
        let signature = self.sign(&format!("{path}{expiry}"))?;

        let separator = if url.contains('?') { '&' } else { '?' };
        Ok(format!("{url}{separator}ik-t={expiry}&ik-s={signature}"))
    }

    fn sign(&self, payload: &str) -> MediaResult<String> {
        let mut mac = HmacSha1::new_from_slice(self.private_key.as_bytes())
            .map_err(|e| MediaError::InvalidKey(e.to_string()))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl std::fmt::Debug for ImageKitBroker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageKitBroker")
            .field("public_key", &self.public_key)
            .field("url_endpoint", &self.url_endpoint)
            .finish_non_exhaustive()
    }
}

impl MediaBroker for ImageKitBroker {
    #[instrument(skip(self))]
    fn upload_credentials(&self) -> Result<UploadCredentials, DomainError> {
        let token = Uuid::new_v4().to_string();
        let credentials = self.credentials_at(&token, Utc::now().timestamp())?;
        debug!(expire = credentials.expire, "Issued upload credentials");
        Ok(credentials)
    }

    #[instrument(skip(self))]
    fn sign_url(&self, file_path: &str, expiry_seconds: u64) -> Result<String, DomainError> {
        Ok(self.sign_url_at(file_path, expiry_seconds, Utc::now().timestamp())?)
    }
}
