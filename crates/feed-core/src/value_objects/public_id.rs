//! Public identifier - the opaque token exposed to clients
//!
//! Every post and artifact carries two identifiers: a sequential internal key
//! that never leaves the persistence boundary, and a random UUID v4 that is
//! safe to hand out. Only the latter is represented by this type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque, externally-safe identifier of a post or artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicId(Uuid);

impl PublicId {
    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random identifier
    ///
    /// The database assigns identifiers for persisted rows; this is used by
    /// in-memory repositories and tests.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from the hyphenated (or simple) string form
    pub fn parse(s: &str) -> Result<Self, PublicIdParseError> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| PublicIdParseError::InvalidFormat)
    }
}

/// Error when parsing a PublicId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PublicIdParseError {
    #[error("invalid public id format")]
    InvalidFormat,
}

impl fmt::Display for PublicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for PublicId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<PublicId> for Uuid {
    fn from(id: PublicId) -> Self {
        id.0
    }
}

impl std::str::FromStr for PublicId {
    type Err = PublicIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PublicId::parse(s)
    }
}

impl Serialize for PublicId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PublicId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        PublicId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
