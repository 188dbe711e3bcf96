//! Thought message - the validated text of a thought
//!
//! Length is counted in Unicode scalar values, so "héllo" is five characters.
//! Input is stored exactly as submitted; no trimming happens here.

use std::fmt;

use crate::error::DomainError;

/// Message text with a length in `[MIN_LENGTH, MAX_LENGTH]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThoughtMessage(String);

impl ThoughtMessage {
    /// Minimum number of characters
    pub const MIN_LENGTH: usize = 5;
    /// Maximum number of characters
    pub const MAX_LENGTH: usize = 140;

    /// Validate and wrap a message
    pub fn parse(message: impl Into<String>) -> Result<Self, DomainError> {
        let message = message.into();
        let actual = message.chars().count();

        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&actual) {
            return Err(DomainError::MessageLength {
                min: Self::MIN_LENGTH,
                max: Self::MAX_LENGTH,
                actual,
            });
        }

        Ok(Self(message))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ThoughtMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
