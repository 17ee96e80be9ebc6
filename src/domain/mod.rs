//! Domain layer containing the click analytics model and remote capability.
//!
//! # Architecture
//!
//! - [`entities`] - Identity, links, per-country clicks and their aggregates
//! - [`providers`] - The [`providers::MetricsProvider`] capability, credential and error types
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - The provider trait defines the contract implemented by the infrastructure layer
//! - Aggregation logic lives in services (see [`crate::application::services`])

pub mod entities;
pub mod providers;
