//! Application layer services implementing the aggregation logic.
//!
//! This layer orchestrates remote operations through the
//! [`crate::domain::providers::MetricsProvider`] capability and provides a
//! clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::averages_service::ClickAveragesService`] - Per-country average daily clicks
//! - [`services::group_links::fetch_all_links`] - Paginated group link listing

pub mod services;
