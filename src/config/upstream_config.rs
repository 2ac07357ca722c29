use crate::config::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Settings for the third-party product-search service.
///
/// The credential is never compiled in: it is read from the environment
/// variable named by `api_key_env` at startup, or from `api_key` in the
/// configuration file when the variable is unset.
#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub engine: String,
    pub api_key_env: String,
    pub api_key: Option<String>,
    /// Request timeout; the transport default applies when unset.
    pub timeout_secs: Option<u64>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            engine: default_engine(),
            api_key_env: default_api_key_env(),
            api_key: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("engine", &self.engine)
            .field("api_key_env", &self.api_key_env)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl UpstreamConfig {
    /// Overrides `api_key` with the value of `api_key_env` when that variable is set.
    pub fn apply_env(&mut self) {
        if self.api_key_env.trim().is_empty() {
            return;
        }
        match std::env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => {
                tracing::debug!("Upstream API key taken from ${}", self.api_key_env);
                self.api_key = Some(value);
            }
            _ => {}
        }
    }

    /// Parsed upstream endpoint.
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUpstreamUrl(format!("{}: {}", self.base_url, e)))?;
        if url.query().is_some() {
            return Err(ConfigError::InvalidUpstreamUrl(format!(
                "{}: must not carry a query string",
                self.base_url
            )));
        }
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidUpstreamUrl(format!(
                "{}: unsupported scheme '{}'",
                self.base_url, other
            ))),
        }
    }

    /// The resolved credential, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint()?;
        if self.engine.trim().is_empty() {
            return Err(ConfigError::EmptyEngine);
        }
        if self.api_key().is_none() {
            return Err(ConfigError::MissingApiKey(self.api_key_env.clone()));
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "https://serpapi.com/search.json".to_string()
}

fn default_engine() -> String {
    "google_product".to_string()
}

fn default_api_key_env() -> String {
    "SERPAPI_API_KEY".to_string()
}
