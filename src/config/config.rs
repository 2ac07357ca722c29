use crate::config::{LoggingConfig, NetworkConfig, ProxyConfig, UpstreamConfig};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Proxy id must not be empty")]
    InvalidProxyId,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid upstream base_url: {0}")]
    InvalidUpstreamUrl(String),

    #[error("Upstream engine must not be empty")]
    EmptyEngine,

    #[error("Upstream API key is missing; set ${0} or upstream.api_key")]
    MissingApiKey(String),

    #[error("Upstream timeout_secs must be greater than zero")]
    InvalidTimeout,

    #[error("logging.log_file_path is required when log_to_file is enabled")]
    MissingLogFilePath,
}

/// Top-level gateway configuration.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Config {
    /// Reads, resolves and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    /// Parses a TOML document, injects environment secrets and validates.
    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(raw)?;
        config.upstream.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.proxy.validate()?;
        self.network.http.socket_addr()?;
        self.logging.validate()?;
        self.upstream.validate()?;
        Ok(())
    }
}
