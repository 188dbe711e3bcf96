//! # thoughts-api
//!
//! REST API server built with Axum framework.
//!
//! Exposes four endpoints: `GET /`, `GET /thoughts`, `POST /thoughts` and
//! `POST /thoughts/:id/like`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server, serve};
pub use state::AppState;
