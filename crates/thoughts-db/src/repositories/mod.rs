//! Repository implementations
//!
//! Implementations of the repository trait defined in thoughts-core.

mod error;
mod memory;
mod thought;

pub use memory::MemoryThoughtRepository;
pub use thought::PgThoughtRepository;
