//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`bitly`] - HTTP client for the Bitly v4 API

pub mod bitly;
