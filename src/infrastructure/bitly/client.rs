//! Bitly v4 implementation of [`MetricsProvider`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::decode::{decode_click_metrics, decode_link_page, decode_user_info};
use super::request::RequestBuilder;
use super::transport::{HttpTransport, ReqwestTransport};
use crate::domain::entities::{CLICK_WINDOW_DAYS, ClickMetrics, Link, LinkPage, UserInfo};
use crate::domain::providers::{
    Credential, DecodeError, MetricsProvider, PageCursor, RemoteError,
};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Bitly v4 API.
///
/// Holds no per-user state: the credential is supplied on every call, so a
/// single instance is shared by all concurrent requests.
pub struct BitlyClient {
    requests: RequestBuilder,
    transport: Arc<dyn HttpTransport>,
}

impl BitlyClient {
    /// Creates a client for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Transport`] if the underlying HTTP client cannot
    /// be initialised (e.g. TLS backend failure).
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_transport(
            RequestBuilder::new(client.clone(), base_url),
            Arc::new(ReqwestTransport::new(client)),
        ))
    }

    /// Creates a client from explicit request builder and transport.
    pub fn with_transport(requests: RequestBuilder, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            requests,
            transport,
        }
    }

    /// Builds, sends and decodes a single GET.
    async fn get<T>(
        &self,
        target: &str,
        credential: &Credential,
        decode: fn(&[u8]) -> Result<T, DecodeError>,
    ) -> Result<T, RemoteError> {
        let request = self.requests.build(target, "GET", credential)?;
        let body = self.transport.send(request).await?;
        Ok(decode(&body)?)
    }
}

/// Checks that an identifier can be spliced into a relative path as-is.
///
/// Bitlink ids keep their inner `/` (`bit.ly/abc`), so `allow_slash` admits
/// `/` between non-empty segments. Anything that would move the request off
/// the intended resource (query or fragment markers, escapes, dot segments)
/// is rejected before a request is built.
fn path_segment<'a>(
    value: &'a str,
    kind: &str,
    allow_slash: bool,
) -> Result<&'a str, RemoteError> {
    let invalid = |reason: &str| {
        RemoteError::request_construction(value, format!("invalid {}: {}", kind, reason))
    };

    if value.is_empty() {
        return Err(invalid("empty"));
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '?' | '#' | '%' | '\\') || c.is_whitespace() || c.is_control())
    {
        return Err(invalid(&format!("contains {:?}", c)));
    }
    if !allow_slash && value.contains('/') {
        return Err(invalid("contains '/'"));
    }
    if value
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(invalid("empty or dot path segment"));
    }

    Ok(value)
}

#[async_trait]
impl MetricsProvider for BitlyClient {
    async fn fetch_user_info(&self, credential: &Credential) -> Result<UserInfo, RemoteError> {
        self.get("user", credential, decode_user_info).await
    }

    async fn fetch_links_page(
        &self,
        credential: &Credential,
        cursor: &PageCursor,
    ) -> Result<LinkPage, RemoteError> {
        let target = match cursor {
            PageCursor::Group(guid) => {
                format!("groups/{}/bitlinks", path_segment(guid, "group guid", false)?)
            }
            PageCursor::Continuation(next) => next.clone(),
        };
        debug!(target = %target, "Fetching group links page");

        self.get(&target, credential, decode_link_page).await
    }

    async fn fetch_clicks_by_country(
        &self,
        credential: &Credential,
        link: &Link,
    ) -> Result<ClickMetrics, RemoteError> {
        let target = format!(
            "bitlinks/{}/countries?unit=day&units={}",
            path_segment(&link.id, "bitlink id", true)?,
            CLICK_WINDOW_DAYS
        );

        self.get(&target, credential, decode_click_metrics).await
    }
}
