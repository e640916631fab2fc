//! Media broker port
//!
//! The external media host stores the file bytes. The backend only hands out
//! upload credentials and signs time-limited display URLs.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lifetime of a signed display URL when the caller does not choose one
pub const DEFAULT_SIGNED_URL_EXPIRY_SECS: u64 = 600;

/// Short-lived parameters that let a client upload one file directly to the
/// media host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCredentials {
    pub public_key: String,
    pub token: String,
    /// Unix timestamp (seconds) after which the credentials are rejected
    pub expire: i64,
    pub signature: String,
}

pub trait MediaBroker: Send + Sync {
    /// Issue fresh single-use upload credentials
    fn upload_credentials(&self) -> Result<UploadCredentials, DomainError>;

    /// Sign a display URL for a stored file path, valid for `expiry_seconds`
    ///
    /// Callers must pass a non-empty path.
    fn sign_url(&self, file_path: &str, expiry_seconds: u64) -> Result<String, DomainError>;
}
