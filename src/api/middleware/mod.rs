//! HTTP middleware for request processing.
//!
//! Provides bearer extraction and observability middleware.

pub mod auth;
pub mod tracing;
