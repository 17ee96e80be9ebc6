//! Execution of built requests against the remote service.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Request};
use tracing::{debug, warn};

use crate::domain::providers::RemoteError;

/// Sends a request and returns the full response body.
///
/// Implementations must release the connection before returning on every
/// path, successful or not.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes `request` and reads the complete body.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::Transport`] if no response was obtained
    /// - [`RemoteError::RemoteStatus`] if the response was unsuccessful or its
    ///   body could not be read
    async fn send(&self, request: Request) -> Result<Bytes, RemoteError>;
}

/// `reqwest`-backed transport.
///
/// The response is owned by [`HttpTransport::send`] and consumed (or dropped)
/// before it returns, which hands the pooled connection back to the client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Bytes, RemoteError> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "Sending remote request");

        let response = self.client.execute(request).await.map_err(|e| {
            warn!(%method, %url, "Remote request failed: {}", e);
            RemoteError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(%method, %url, status = status.as_u16(), "Remote service returned an error status");
            return Err(RemoteError::RemoteStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(%method, %url, "Failed to read response body: {}", e);
            RemoteError::RemoteStatus {
                status: status.as_u16(),
                message: format!("Failed to read response body: {}", e),
            }
        })?;

        debug!(%method, %url, status = status.as_u16(), bytes = body.len(), "Remote request complete");
        Ok(body)
    }
}
