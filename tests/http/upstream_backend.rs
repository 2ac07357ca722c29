#[path = "../common/mod.rs"]
mod common;

use common::{build_mock_upstream_server, gateway_config, unreachable_upstream};
use product_gateway::adapters::http::HttpAdapter;
use product_gateway::backends::{HttpBackend, UpstreamBackend, UpstreamQuery};
use product_gateway::config::Config;
use serde_json::json;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

fn backend_for(endpoint: &str) -> HttpBackend {
    HttpBackend::new(Url::parse(endpoint).unwrap(), Some(Duration::from_secs(5)))
        .expect("client builds")
}

#[tokio::test]
async fn test_backend_returns_status_and_parsed_body() {
    let (upstream, recorder) = build_mock_upstream_server().await;
    let backend = backend_for(&upstream);

    let response = backend
        .fetch(&UpstreamQuery::new("google_product", "missing", "k"))
        .await
        .expect("upstream reachable");

    assert_eq!(response.status, 404);
    assert_eq!(response.status_text, "Not Found");
    assert!(!response.is_success());
    assert_eq!(response.body, json!({ "message": "not found" }));
    assert_eq!(recorder.calls(), 1);
}

#[tokio::test]
async fn test_backend_sends_json_content_type() {
    let (upstream, recorder) = build_mock_upstream_server().await;

    backend_for(&upstream)
        .fetch(&UpstreamQuery::new("google_product", "shirt", "k"))
        .await
        .unwrap();

    assert_eq!(recorder.last_content_type().as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_backend_connection_failure_has_no_status() {
    let upstream = unreachable_upstream().await;

    let err = backend_for(&upstream)
        .fetch(&UpstreamQuery::new("google_product", "shirt", "secret-key"))
        .await
        .unwrap_err();

    assert_eq!(err.status, None);
    assert!(!err.message.is_empty());
    assert!(!err.message.contains("secret-key"));
}

#[tokio::test]
async fn test_backend_rejects_non_json_body() {
    let (upstream, _) = build_mock_upstream_server().await;

    let err = backend_for(&upstream)
        .fetch(&UpstreamQuery::new("google_product", "html", "k"))
        .await
        .unwrap_err();

    assert!(err.message.starts_with("Invalid JSON in upstream response"));
}

#[tokio::test]
async fn test_adapter_serves_and_shuts_down() {
    let (upstream, recorder) = build_mock_upstream_server().await;
    let config = Config::from_toml(&gateway_config(&upstream)).unwrap();
    let app = product_gateway::build_app(&config).unwrap();

    let adapter = HttpAdapter::new(config.network.http.socket_addr().unwrap());
    let shutdown = CancellationToken::new();
    let (addr, handle) = adapter.start(app, shutdown.clone()).await.unwrap();

    let response = reqwest::get(format!("http://{}/product-lookup/quota", addr))
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "quota exceeded");
    assert_eq!(recorder.calls(), 1);

    shutdown.cancel();
    tokio::time::timeout(Duration::from_secs(5), handle)
        .await
        .expect("adapter stops after cancellation")
        .unwrap();
}

#[tokio::test]
async fn test_adapter_reports_bind_failure() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = taken.local_addr().unwrap();

    let (upstream, _) = build_mock_upstream_server().await;
    let config = Config::from_toml(&gateway_config(&upstream)).unwrap();
    let app = product_gateway::build_app(&config).unwrap();

    let result = HttpAdapter::new(addr).start(app, CancellationToken::new()).await;
    assert!(result.is_err());
}
