//! Domain entities - core business objects

mod thought;

pub use thought::Thought;
