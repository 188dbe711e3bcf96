//! # thoughts-service
//!
//! Application layer containing the thought use cases and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CreateThoughtRequest, EndpointResponse, IndexResponse, ThoughtResponse, WELCOME_MESSAGE,
};
pub use services::{ServiceContext, ServiceError, ServiceResult, ThoughtService};
