//! Capability trait for the three remote operations the aggregation needs.

use async_trait::async_trait;

use super::{Credential, RemoteError};
use crate::domain::entities::{ClickMetrics, Link, LinkPage, UserInfo};

/// Position in a paginated group listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageCursor {
    /// First page of the listing for a group GUID.
    Group(String),
    /// A fully-qualified locator returned as `pagination.next` by the
    /// previous page, requested verbatim.
    Continuation(String),
}

/// Remote click-metrics operations, parameterised by the caller's credential.
///
/// This is the only seam between the aggregation logic and the network.
/// Pass it around as `Arc<dyn MetricsProvider>`; tests substitute their own
/// implementation per call site.
///
/// # Implementations
///
/// - [`crate::infrastructure::bitly::BitlyClient`] - HTTP client for the Bitly v4 API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Fetches the account identity, including its default group.
    ///
    /// # Errors
    ///
    /// Returns any [`RemoteError`] raised while building, sending or decoding.
    async fn fetch_user_info(&self, credential: &Credential) -> Result<UserInfo, RemoteError>;

    /// Fetches a single page of a group's links.
    ///
    /// # Errors
    ///
    /// Returns any [`RemoteError`] raised while building, sending or decoding.
    async fn fetch_links_page(
        &self,
        credential: &Credential,
        cursor: &PageCursor,
    ) -> Result<LinkPage, RemoteError>;

    /// Fetches per-country clicks for one link over the fixed window.
    ///
    /// # Errors
    ///
    /// Returns any [`RemoteError`] raised while building, sending or decoding.
    async fn fetch_clicks_by_country(
        &self,
        credential: &Credential,
        link: &Link,
    ) -> Result<ClickMetrics, RemoteError>;
}
