//! HTTP request handlers for API endpoints.

pub mod averages;
pub mod health;

pub use averages::averages_handler;
pub use health::health_handler;
