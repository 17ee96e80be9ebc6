//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                  - Liveness check (public)
//! - `GET /api/countries/averages`  - Per-country average clicks (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Bearer token extraction for `/api/*`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the application routes with middleware, without path normalization.
pub fn build_router(state: AppState) -> Router {
    let api_router =
        api::routes::protected_routes().route_layer(middleware::from_fn(auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
