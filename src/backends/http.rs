use crate::backends::{TransportError, UpstreamBackend, UpstreamQuery, UpstreamResponse};
use crate::config::UpstreamConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest-backed client for the product-search service.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    pub fn new(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn from_config(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let endpoint = config.endpoint()?;
        Ok(Self::new(endpoint, config.timeout())?)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UpstreamBackend for HttpBackend {
    async fn fetch(&self, query: &UpstreamQuery) -> Result<UpstreamResponse, TransportError> {
        tracing::debug!(
            "Calling upstream {} for product '{}'",
            self.endpoint,
            query.product_id
        );

        let response = self
            .client
            .get(query.to_url(&self.endpoint))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;

        Ok(UpstreamResponse::new(status.as_u16(), body))
    }
}
