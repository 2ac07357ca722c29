use crate::config::ConfigError;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Default, Clone)]
pub struct NetworkConfig {
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_address: String,
    pub bind_port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
        }
    }
}

impl HttpConfig {
    /// Resolves the listener address from `bind_address` and `bind_port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.bind_port)
        } else {
            format!("{}:{}", self.bind_address, self.bind_port)
        };
        raw.parse()
            .map_err(|_| ConfigError::InvalidBindAddress(raw))
    }
}
