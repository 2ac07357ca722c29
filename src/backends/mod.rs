pub mod http;
pub mod query;

pub use self::http::HttpBackend;
pub use query::UpstreamQuery;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// The product-search service seen from the gateway.
///
/// Implementations issue exactly one call per `fetch` and never retry.
#[async_trait]
pub trait UpstreamBackend: Send + Sync {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, TransportError>;
}

/// Raw reply received from upstream with its body already parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub status_text: String,
    pub body: Value,
}

impl UpstreamResponse {
    /// Builds a response, deriving the status text from the code.
    pub fn new(status: u16, body: Value) -> Self {
        let status_text = ::http::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();
        Self {
            status,
            status_text,
            body,
        }
    }

    /// Status-ok flag: the code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The upstream call could not be completed or its body could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
    /// Status code exposed by the underlying failure, if any.
    pub status: Option<u16>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        // The request URL carries the API key.
        let err = err.without_url();
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        let mut root = None;
        while let Some(cause) = source {
            root = Some(cause);
            source = cause.source();
        }
        if let Some(root) = root {
            message = format!("{}: {}", message, root);
        }
        Self { message, status }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Invalid JSON in upstream response: {}", err))
    }
}
