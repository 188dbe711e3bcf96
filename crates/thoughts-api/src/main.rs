//! Happy Thoughts API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p thoughts-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use thoughts_common::{try_init_tracing, AppConfig, AppResult, ConfigError, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so load it before tracing
    let config = AppConfig::from_env();

    let tracing_config = match &config {
        Ok(config) => TracingConfig::for_environment(config.env),
        Err(_) => TracingConfig::default(),
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = start(config).await {
        error!(error = %e, code = e.error_code(), "Server failed to start");
        std::process::exit(1);
    }
}

async fn start(config: Result<AppConfig, ConfigError>) -> AppResult<()> {
    let config = config?;

    info!(
        env = ?config.env,
        port = config.api.port,
        "Configuration loaded"
    );

    thoughts_api::run(config).await
}
