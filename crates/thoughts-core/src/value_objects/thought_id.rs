//! Thought ID - opaque identifier assigned when a thought is stored

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a thought (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ThoughtId(Uuid);

impl ThoughtId {
    /// Generate a fresh random ID
    #[inline]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ThoughtIdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ThoughtIdParseError::InvalidFormat(s.to_string()))
    }
}

/// Error when parsing a ThoughtId from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThoughtIdParseError {
    #[error("Invalid thought id: {0}")]
    InvalidFormat(String),
}

impl fmt::Display for ThoughtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
