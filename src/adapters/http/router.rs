use crate::models::envelope::GatewayResponse;
use crate::models::lookup::ProductLookupRequest;
use crate::pipeline::LookupExecutor;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use serde_json::{json, Value};
use std::sync::Arc;

/// Build the gateway router.
///
/// `/product-lookup` with and without a trailing slash is routed too, so a
/// missing identifier still gets the JSON validation envelope instead of a
/// bare 404.
pub fn build_router(executor: Arc<LookupExecutor>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/product-lookup", get(lookup_without_id))
        .route("/product-lookup/", get(lookup_without_id))
        .route("/product-lookup/{product_id}", get(lookup_product))
        .fallback(not_found)
        .with_state(executor)
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn lookup_product(
    State(executor): State<Arc<LookupExecutor>>,
    product_id: Result<Path<String>, PathRejection>,
) -> GatewayResponse {
    let product_id = match product_id {
        Ok(Path(id)) => Some(id),
        Err(rejection) => {
            tracing::debug!("Unusable product id in path: {}", rejection);
            None
        }
    };
    executor.respond(&ProductLookupRequest::new(product_id)).await
}

async fn lookup_without_id(State(executor): State<Arc<LookupExecutor>>) -> GatewayResponse {
    executor.respond(&ProductLookupRequest::new(None)).await
}
