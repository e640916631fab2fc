//! Media broker errors

use feed_core::DomainError;

/// Errors raised while signing for the media host
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("file path must not be empty")]
    EmptyPath,

    #[error("invalid signing key: {0}")]
    InvalidKey(String),

    #[error("media host is not configured: {0}")]
    NotConfigured(&'static str),
}

pub type MediaResult<T> = Result<T, MediaError>;

impl From<MediaError> for DomainError {
    fn from(err: MediaError) -> Self {
        match err {
            MediaError::EmptyPath => DomainError::ValidationError(err.to_string()),
            MediaError::InvalidKey(_) | MediaError::NotConfigured(_) => {
                DomainError::UpstreamError(err.to_string())
            }
        }
    }
}
