//! HTTP API Layer
//!
//! This crate exposes the estate-settlement engine over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Inventory computation, asset classification, tax rates
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response bodies that are not domain types
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_inventory::InventoryEngine;

use crate::config::ApiConfig;
use crate::handlers::{health, inventory, tax};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub engine: Arc<InventoryEngine>,
}

impl AppState {
    /// Builds the engine from the configuration
    pub fn new(config: ApiConfig) -> Self {
        let engine = InventoryEngine::new(config.engine_settings());
        Self {
            config,
            engine: Arc::new(engine),
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(config: ApiConfig) -> Router {
    let state = AppState::new(config);

    let public_routes = Router::new().route("/health", get(health::health_check));

    let api_routes = Router::new()
        .route("/inventories/compute", post(inventory::compute_inventory))
        .route("/assets/classify", post(inventory::classify))
        .route("/tax-rates/:jurisdiction", get(tax::get_tax_rate))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
