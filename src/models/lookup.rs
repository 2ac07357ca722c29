use crate::pipeline::LookupError;
use serde::Deserialize;

/// Inbound lookup carrying the product identifier taken from the route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProductLookupRequest {
    #[serde(default, rename = "productId")]
    pub product_id: Option<String>,
}

impl ProductLookupRequest {
    pub fn new(product_id: Option<String>) -> Self {
        Self { product_id }
    }

    pub fn for_product(product_id: impl Into<String>) -> Self {
        Self::new(Some(product_id.into()))
    }

    /// Returns the identifier when it is present and non-empty.
    ///
    /// The identifier is opaque: whitespace is forwarded as-is.
    pub fn validate(&self) -> Result<&str, LookupError> {
        match self.product_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(LookupError::MissingProductId),
        }
    }
}
