//! Business logic services

pub mod context;
pub mod error;
pub mod thought;

pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use thought::ThoughtService;
