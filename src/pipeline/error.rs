use crate::backends::TransportError;
use crate::models::envelope::{FailureEnvelope, GatewayResponse};
use http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Message returned when the route carries no usable product identifier.
pub const MISSING_PRODUCT_ID: &str = "Product ID is required";

/// Message used when a transport failure has no text of its own.
pub const FETCH_FAILED: &str = "Failed to fetch product data";

/// `type` tag of failures raised inside the gateway rather than upstream.
pub const FETCH_ERROR_TYPE: &str = "fetch_error";

/// Every way a product lookup can fail, in classification precedence order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// The identifier was absent or blank; upstream was not contacted.
    #[error("Product ID is required")]
    MissingProductId,

    /// The upstream call did not complete or returned an unparseable body.
    #[error("{message}")]
    Transport { message: String, status: Option<u16> },

    /// Upstream answered with a non-2xx status.
    #[error("{message}")]
    UpstreamHttp {
        status: u16,
        message: String,
        details: Value,
    },

    /// Upstream answered 2xx but reported an `error` in the body.
    #[error("{message}")]
    UpstreamLogical { message: String, details: Value },
}

impl LookupError {
    /// HTTP status sent back to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            LookupError::MissingProductId => StatusCode::BAD_REQUEST,
            LookupError::Transport { status, .. } => status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            LookupError::UpstreamHttp { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            // Logical failures are always reported in the client range,
            // even for upstream-side causes such as exhausted quota.
            LookupError::UpstreamLogical { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn envelope(&self) -> FailureEnvelope {
        match self {
            LookupError::MissingProductId => FailureEnvelope::new(MISSING_PRODUCT_ID),
            LookupError::Transport { message, .. } => {
                let message = if message.trim().is_empty() {
                    FETCH_FAILED
                } else {
                    message.as_str()
                };
                FailureEnvelope::new(message).with_kind(FETCH_ERROR_TYPE)
            }
            LookupError::UpstreamHttp {
                status,
                message,
                details,
            } => FailureEnvelope::new(message.clone())
                .with_status(*status)
                .with_details(details.clone()),
            LookupError::UpstreamLogical { message, details } => {
                FailureEnvelope::new(message.clone()).with_details(details.clone())
            }
        }
    }

    pub fn to_response(&self) -> GatewayResponse {
        GatewayResponse::failure(self.status_code(), &self.envelope())
    }

    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::MissingProductId => "validation",
            LookupError::Transport { .. } => "transport",
            LookupError::UpstreamHttp { .. } => "upstream_http",
            LookupError::UpstreamLogical { .. } => "upstream_logical",
        }
    }
}

impl From<TransportError> for LookupError {
    fn from(err: TransportError) -> Self {
        LookupError::Transport {
            message: err.message,
            status: err.status,
        }
    }
}
