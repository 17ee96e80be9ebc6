//! # Click Averages
//!
//! Per-country average daily clicks across a Bitly user's default group,
//! served over HTTP with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Click analytics entities and the remote capability trait
//! - **Application Layer** ([`application`]) - Pagination and aggregation logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Bitly v4 HTTP client
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## How an aggregation runs
//!
//! 1. Fetch the account to find its default group
//! 2. List every link in the group, following pagination cursors
//! 3. Fetch clicks by country for each link, one at a time, merging totals
//! 4. Divide each country's total by the 30-day window (integer division)
//!
//! Any remote failure aborts the run; there is no partial result.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! curl -H "Authorization: Bearer $BITLY_TOKEN" http://localhost:8080/api/countries/averages
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::ClickAveragesService;
    pub use crate::domain::entities::{CLICK_WINDOW_DAYS, CountryAverages, Link, UserInfo};
    pub use crate::domain::providers::{Credential, MetricsProvider, PageCursor, RemoteError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::bitly::BitlyClient;
    pub use crate::state::AppState;
}
