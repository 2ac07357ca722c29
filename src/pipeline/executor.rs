use crate::backends::{UpstreamBackend, UpstreamQuery};
use crate::config::{ConfigError, UpstreamConfig};
use crate::models::envelope::GatewayResponse;
use crate::models::lookup::ProductLookupRequest;
use crate::pipeline::{classify, LookupError};
use serde_json::Value;
use std::sync::Arc;

/// Runs one product lookup: validation, the upstream call, classification.
///
/// Holds no per-request state, so a single instance is shared by all
/// handlers and every call is independent of the ones before it.
pub struct LookupExecutor {
    backend: Arc<dyn UpstreamBackend>,
    engine: String,
    api_key: String,
}

impl LookupExecutor {
    pub fn new(
        backend: Arc<dyn UpstreamBackend>,
        engine: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            engine: engine.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(
        config: &UpstreamConfig,
        backend: Arc<dyn UpstreamBackend>,
    ) -> Result<Self, ConfigError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| ConfigError::MissingApiKey(config.api_key_env.clone()))?;
        Ok(Self::new(backend, config.engine.trim(), api_key))
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    /// Builds the outbound query for an already validated identifier.
    pub fn query_for(&self, product_id: &str) -> UpstreamQuery {
        UpstreamQuery::new(&self.engine, product_id, &self.api_key)
    }

    /// Returns the raw upstream body on success.
    #[tracing::instrument(skip(self, request), fields(
        product_id = request.product_id.as_deref().unwrap_or(""),
        engine = self.engine.as_str()
    ))]
    pub async fn execute(&self, request: &ProductLookupRequest) -> Result<Value, LookupError> {
        let product_id = request.validate()?;
        let query = self.query_for(product_id);

        classify(self.backend.fetch(&query).await)
    }

    /// Same as [`execute`](Self::execute), folded into the caller-facing envelope.
    pub async fn respond(&self, request: &ProductLookupRequest) -> GatewayResponse {
        match self.execute(request).await {
            Ok(body) => {
                tracing::info!("Product lookup succeeded");
                GatewayResponse::success(body)
            }
            Err(err) => {
                let response = err.to_response();
                tracing::warn!(
                    "Product lookup failed ({}): {} -> {}",
                    err.kind(),
                    err,
                    response.status
                );
                response
            }
        }
    }
}
