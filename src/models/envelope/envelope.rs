use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized failure body returned to callers.
///
/// Absent fields are omitted from the JSON document, so a validation failure
/// serializes as `{"error": "..."}` and an upstream HTTP failure as
/// `{"error": "...", "status": 404, "details": {...}}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FailureEnvelope {
    /// Human readable failure message.
    pub error: String,
    /// Upstream HTTP status code, when the failure came from upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw upstream body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// Tag for failures that originated inside the gateway.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl FailureEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            details: None,
            kind: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// A status code plus the JSON document sent back for one lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl GatewayResponse {
    /// Success: the upstream body passed through unchanged.
    pub fn success(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    pub fn failure(status: StatusCode, envelope: &FailureEnvelope) -> Self {
        let body = serde_json::to_value(envelope)
            .unwrap_or_else(|_| serde_json::json!({ "error": envelope.error }));
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
