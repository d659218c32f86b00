//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Service banner
//! - `GET  /health`      - Health check
//! - `GET  /{code}`      - Short link redirect
//! - `/api/*`            - REST API
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin may call the API

use crate::api;
use crate::api::handlers::{health_handler, index_handler, redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
