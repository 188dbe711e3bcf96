//! Route definitions
//!
//! Routes are registered through a [`RouteTable`], which remembers every
//! path and method it hands to axum so the root endpoint can list them.

use std::sync::Arc;

use axum::{
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
    Extension, Router,
};
use thoughts_service::EndpointResponse;

use crate::handlers::{index, thoughts};
use crate::state::AppState;

/// Registered endpoints, shared with the root handler
pub type Endpoints = Arc<Vec<EndpointResponse>>;

/// Router builder that records its own registrations
#[derive(Default)]
pub struct RouteTable {
    router: Router<AppState>,
    endpoints: Vec<EndpointResponse>,
}

impl RouteTable {
    /// Register a GET handler
    pub fn get<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.route(path, Method::GET, routing::get(handler))
    }

    /// Register a POST handler
    pub fn post<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        self.route(path, Method::POST, routing::post(handler))
    }

    fn route(mut self, path: &str, method: Method, method_router: MethodRouter<AppState>) -> Self {
        self.record(path, &method);
        self.router = self.router.route(path, method_router);
        self
    }

    // Paths keep registration order; methods are merged per path
    fn record(&mut self, path: &str, method: &Method) {
        let index = match self.endpoints.iter().position(|e| e.path == path) {
            Some(index) => index,
            None => {
                self.endpoints.push(EndpointResponse::new(path));
                self.endpoints.len() - 1
            }
        };

        let methods = &mut self.endpoints[index].methods;
        if !methods.iter().any(|m| m == method.as_str()) {
            methods.push(method.as_str().to_string());
        }
    }

    /// Finish the router and attach the endpoint list as an extension
    pub fn into_router(self) -> Router<AppState> {
        let endpoints: Endpoints = Arc::new(self.endpoints);
        self.router.layer(Extension(endpoints))
    }
}

/// Route table with every API endpoint registered
pub fn route_table() -> RouteTable {
    RouteTable::default()
        .get("/", index::list_endpoints)
        .get("/thoughts", thoughts::list_thoughts)
        .post("/thoughts", thoughts::create_thought)
        .post("/thoughts/:id/like", thoughts::like_thought)
}

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    route_table().into_router()
}
