// HTTP Transport Port
use crate::domain::RawResponse;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failure (connection, TLS, IO)
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Failed to read response body: {0}")]
    Body(String),

    #[error("Transport error: {0}")]
    Other(String),
}

/// HTTP transport port
///
/// Implementations own connection handling, authentication and TLS. The core
/// only hands over a URL and a JSON body and inspects status and body text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` as JSON to `url`
    ///
    /// Any HTTP status is a successful transport round trip; only failures to
    /// obtain a response are errors.
    async fn post_json(&self, url: &str, body: &Value) -> Result<RawResponse, TransportError>;
}
