//! Route handlers
//!
//! Each handler delegates to exactly one service call.

pub mod index;
pub mod thoughts;
