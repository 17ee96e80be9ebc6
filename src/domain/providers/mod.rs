//! Remote capability definitions for the domain layer.
//!
//! The aggregation logic depends only on the [`MetricsProvider`] trait; the
//! HTTP implementation lives in `crate::infrastructure::bitly`.

pub mod credential;
pub mod error;
pub mod metrics_provider;

pub use credential::Credential;
pub use error::{DecodeError, RemoteError};
pub use metrics_provider::{MetricsProvider, PageCursor};

#[cfg(test)]
pub use metrics_provider::MockMetricsProvider;
