use std::fmt;
use url::Url;

/// Outbound query sent to the product-search service.
#[derive(Clone, PartialEq, Eq)]
pub struct UpstreamQuery {
    pub engine: String,
    pub product_id: String,
    api_key: String,
}

impl UpstreamQuery {
    pub fn new(
        engine: impl Into<String>,
        product_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            engine: engine.into(),
            product_id: product_id.into(),
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The query parameters in wire order: `engine`, `product_id`, `api_key`.
    pub fn query_pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("engine", self.engine.as_str()),
            ("product_id", self.product_id.as_str()),
            ("api_key", self.api_key.as_str()),
        ]
    }

    /// Appends the query parameters to `endpoint`.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        url
    }
}

impl fmt::Debug for UpstreamQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamQuery")
            .field("engine", &self.engine)
            .field("product_id", &self.product_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
