//! # thoughts-core
//!
//! Domain layer containing the thought entity, value objects, and the repository trait.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::Thought;
pub use error::DomainError;
pub use traits::{RepoResult, ThoughtRepository, RECENT_THOUGHTS_LIMIT};
pub use value_objects::{ThoughtId, ThoughtIdParseError, ThoughtMessage};
