//! Value objects - immutable types that represent domain concepts

mod thought_id;
mod thought_message;

pub use thought_id::{ThoughtId, ThoughtIdParseError};
pub use thought_message::ThoughtMessage;
