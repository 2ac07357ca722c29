#![allow(dead_code)]

use axum::extract::{RawQuery, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the mock upstream saw.
#[derive(Default)]
pub struct UpstreamRecorder {
    calls: AtomicUsize,
    queries: Mutex<Vec<Vec<(String, String)>>>,
    content_types: Mutex<Vec<Option<String>>>,
}

impl UpstreamRecorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn last_content_type(&self) -> Option<String> {
        self.content_types.lock().unwrap().last().cloned().flatten()
    }
}

/// Replies based on the `product_id` query parameter.
async fn search(
    State(recorder): State<Arc<UpstreamRecorder>>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    recorder.calls.fetch_add(1, Ordering::SeqCst);

    let pairs: Vec<(String, String)> = raw
        .as_deref()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default();
    let product_id = pairs
        .iter()
        .find(|(k, _)| k == "product_id")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    recorder.queries.lock().unwrap().push(pairs);
    recorder.content_types.lock().unwrap().push(
        headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
    );

    match product_id.as_str() {
        "missing" => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
        "quota" => Json(json!({ "error": "quota exceeded" })).into_response(),
        "teapot" => (
            StatusCode::IM_A_TEAPOT,
            Json(json!({ "error": "short and stout", "message": "ignored" })),
        )
            .into_response(),
        "boom" => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "retry_after": 30 }))).into_response(),
        "html" => (
            [(header::CONTENT_TYPE, "text/html")],
            "<html><body>maintenance</body></html>",
        )
            .into_response(),
        _ => Json(json!({ "title": "Shirt" })).into_response(),
    }
}

/// Build a mock upstream search server bound to an ephemeral port.
///
/// Returns the full search endpoint URL and the recorder.
pub async fn build_mock_upstream_server() -> (String, Arc<UpstreamRecorder>) {
    let recorder = Arc::new(UpstreamRecorder::default());
    let app = Router::new()
        .route("/search.json", get(search))
        .with_state(recorder.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/search.json", addr), recorder)
}

/// An endpoint on a port nothing listens on.
pub async fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/search.json", addr)
}

/// Gateway config pointing at `base_url`, with the key supplied in the file.
pub fn gateway_config(base_url: &str) -> String {
    format!(
        r#"
        [proxy]
        id = "product-gateway-test"
        log_level = "debug"

        [network.http]
        bind_address = "127.0.0.1"
        bind_port = 0

        [upstream]
        base_url = "{}"
        engine = "google_product"
        api_key_env = "PRODUCT_GATEWAY_TEST_KEY_UNSET"
        api_key = "test-key"
    "#,
        base_url
    )
}
