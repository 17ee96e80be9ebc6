//! Failures raised while talking to the remote metrics service.

use thiserror::Error;

/// A response payload that is not well-formed.
///
/// Missing, `null` or unknown fields never produce this error; only payloads that
/// cannot be parsed at all (or carry a field of the wrong type) do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{resource}: {message}")]
pub struct DecodeError {
    pub resource: &'static str,
    pub message: String,
}

impl DecodeError {
    pub fn new(resource: &'static str, message: impl Into<String>) -> Self {
        Self {
            resource,
            message: message.into(),
        }
    }
}

/// Errors surfaced by every remote operation.
///
/// None of these are retried. The first one raised anywhere in an
/// aggregation run aborts the run and is returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The outbound request could not be built (bad target or verb).
    #[error("Failed to build request for '{target}': {reason}")]
    RequestConstruction { target: String, reason: String },

    /// No response was obtained (connection, DNS, TLS or timeout failure).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response was obtained but was unsuccessful or could not be read.
    #[error("Remote service responded with status {status}: {message}")]
    RemoteStatus { status: u16, message: String },

    /// The response body was not a well-formed payload.
    #[error("Malformed response payload: {0}")]
    Decode(#[from] DecodeError),
}

impl RemoteError {
    pub fn request_construction(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::RequestConstruction {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}
