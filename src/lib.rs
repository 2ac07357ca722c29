pub mod adapters;
pub mod backends;
pub mod config;
pub mod models;
pub mod pipeline;

use crate::adapters::http::{build_router, HttpAdapter};
use crate::backends::HttpBackend;
use crate::config::{Config, LoggingConfig};
use crate::pipeline::LookupExecutor;
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Wire the reqwest backend, the executor and the router from `config`.
pub fn build_app(config: &Config) -> anyhow::Result<Router> {
    let backend = HttpBackend::from_config(&config.upstream)?;
    tracing::info!("Upstream endpoint: {}", backend.endpoint());
    let executor = LookupExecutor::from_config(&config.upstream, Arc::new(backend))?;
    Ok(build_router(Arc::new(executor)))
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    init_logging(&config.logging, &config.proxy.log_level)?;

    tracing::info!("🔧 Starting product gateway '{}'", config.proxy.id);

    let app = build_app(&config)?;
    let adapter = HttpAdapter::new(config.network.http.socket_addr()?);
    tracing::debug!("{}", adapter.summary());

    let shutdown = CancellationToken::new();
    let (_, handle) = adapter.start(app, shutdown.clone()).await?;

    tokio::signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    tracing::info!("Shutdown requested, draining in-flight requests");
    shutdown.cancel();

    handle.await.context("HTTP adapter task panicked")?;
    Ok(())
}

/// Stdout logging, plus a second sink when `log_to_file` is set.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingConfig, log_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("Invalid log level '{}'", log_level))?;

    let stdout_appender = fmt::layer().with_file(true).with_line_number(true);

    if logging.log_to_file {
        let file = std::fs::File::create(&logging.log_file_path)
            .with_context(|| format!("Failed to create log file '{}'", logging.log_file_path))?;
        let file_appender = fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(Arc::new(file));

        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_appender)
            .with(file_appender)
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stdout_appender)
            .try_init()?;
    }

    Ok(())
}
