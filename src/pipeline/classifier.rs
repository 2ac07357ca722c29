use crate::backends::{TransportError, UpstreamResponse};
use crate::pipeline::LookupError;
use serde_json::Value;

/// Folds the result of one upstream call into the lookup outcome.
///
/// Precedence: transport failure, then non-2xx status, then an `error` field
/// inside a 2xx body. Anything else is a success and the body is returned
/// untouched.
pub fn classify(result: Result<UpstreamResponse, TransportError>) -> Result<Value, LookupError> {
    let response = result?;

    if !response.is_success() {
        let message = body_field(&response.body, "error")
            .or_else(|| body_field(&response.body, "message"))
            .unwrap_or_else(|| synthesized_message(&response));
        return Err(LookupError::UpstreamHttp {
            status: response.status,
            message,
            details: response.body,
        });
    }

    if let Some(message) = body_field(&response.body, "error") {
        return Err(LookupError::UpstreamLogical {
            message,
            details: response.body,
        });
    }

    Ok(response.body)
}

/// Reads `key` from a JSON object, treating `null`, `false`, `0` and `""` as absent.
fn body_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn synthesized_message(response: &UpstreamResponse) -> String {
    if response.status_text.is_empty() {
        format!("Upstream request failed with status {}", response.status)
    } else {
        format!(
            "Upstream request failed with status {} {}",
            response.status, response.status_text
        )
    }
}
