//! Entity <-> model mappers

mod thought;

pub use thought::ThoughtInsert;
