//! Shared handler state

use std::sync::Arc;

use thoughts_common::AppConfig;
use thoughts_service::ServiceContext;

/// Cloned into every handler; both fields are cheap reference-counted handles
#[derive(Clone)]
pub struct AppState {
    services: ServiceContext,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services,
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
