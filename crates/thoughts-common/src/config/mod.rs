//! Configuration structs

mod app_config;

pub use app_config::{AppConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, ServerConfig};
