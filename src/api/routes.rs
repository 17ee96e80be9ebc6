//! API route configuration.
//!
//! All API endpoints require a Bearer token via [`crate::api::middleware::auth`].

use crate::api::handlers::averages_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes, protected by Bearer token extraction.
///
/// # Endpoints
///
/// - `GET /countries/averages` - Average daily clicks per country for the default group
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/countries/averages", get(averages_handler))
}
