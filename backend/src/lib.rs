//! Sanabel Bakery Inventory Management - Backend Server
//!
//! A system for a Jordanian bakery chain to track raw-material stock,
//! supplier accounts, and branch distributions from a central warehouse.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod services;
pub mod store;

pub use config::Config;
pub use store::Store;

/// Default tracing directives when `RUST_LOG` is unset. The library
/// crate is named explicitly: that is where the service and seed
/// debug logs are emitted.
pub const DEFAULT_LOG_DIRECTIVES: &str =
    "sanabel_inventory_backend=debug,sanabel_server=debug,tower_http=debug";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(liveness))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Sanabel Bakery Inventory Management API v1.0"
}

/// Liveness endpoint
async fn liveness() -> &'static str {
    "OK"
}
