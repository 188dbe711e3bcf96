//! # thoughts-db
//!
//! Database layer implementing the thought repository trait.
//!
//! ## Overview
//!
//! This crate provides two implementations of `ThoughtRepository`
//! defined in `thoughts-core`:
//!
//! - `PgThoughtRepository`: PostgreSQL via SQLx, used by the server
//! - `MemoryThoughtRepository`: process-local store with the same semantics,
//!   used by tests and local experiments
//!
//! It also handles connection pool management and schema bootstrap.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use thoughts_db::{create_pool, ensure_schema, DatabaseConfig, PgThoughtRepository};
//! use thoughts_core::ThoughtRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig {
//!         url: "postgres://localhost/thoughts".to_string(),
//!         ..Default::default()
//!     };
//!     let pool = create_pool(&config).await?;
//!     ensure_schema(&pool).await?;
//!     let repo = PgThoughtRepository::new(pool);
//!
//!     let recent = repo.list_recent(20).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, ensure_schema, DatabaseConfig, PgPool};
pub use repositories::{MemoryThoughtRepository, PgThoughtRepository};
