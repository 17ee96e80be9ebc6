//! Bitly v4 API client.
//!
//! - [`RequestBuilder`] - Authenticated request construction
//! - [`HttpTransport`] / [`ReqwestTransport`] - Request execution
//! - [`decode`] - Response decoders
//! - [`BitlyClient`] - The production [`crate::domain::providers::MetricsProvider`]

mod client;
pub mod decode;
mod request;
mod transport;

pub use client::BitlyClient;
pub use request::RequestBuilder;
pub use transport::{HttpTransport, ReqwestTransport};

/// Default Bitly v4 API endpoint.
pub const DEFAULT_API_URL: &str = "https://api-ssl.bitly.com/v4/";
