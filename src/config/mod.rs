use clap::Parser;

mod proxy_config;
mod logging_config;
mod network_config;
mod upstream_config;
pub mod config;

pub use config::{Config, ConfigError};
pub use logging_config::LoggingConfig;
pub use network_config::{HttpConfig, NetworkConfig};
pub use proxy_config::ProxyConfig;
pub use upstream_config::UpstreamConfig;

/// Default location of the configuration file when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Command-line arguments of the gateway binary.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "product-gateway",
    about = "Product lookup gateway for a third-party product-search API"
)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: String,
}
