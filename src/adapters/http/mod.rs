use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub mod router;

pub use router::build_router;

/// HTTP adapter
///
/// Owns the listener for the gateway router and serves it until the
/// shutdown token is cancelled.
pub struct HttpAdapter {
    pub bind_addr: SocketAddr,
}

impl HttpAdapter {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Binds the listener and spawns the server task.
    ///
    /// Returns the bound address (useful when binding port 0) and the task
    /// handle, which completes once in-flight requests have drained.
    pub async fn start(
        &self,
        app: Router,
        shutdown: CancellationToken,
    ) -> anyhow::Result<(SocketAddr, JoinHandle<()>)> {
        let listener = TcpListener::bind(self.bind_addr).await.map_err(|e| {
            anyhow::anyhow!("Failed to bind HTTP adapter to {}: {}", self.bind_addr, e)
        })?;
        let local_addr = listener.local_addr()?;

        tracing::info!("🚀 HTTP adapter started on {}", local_addr);

        let handle = tokio::spawn(async move {
            let graceful_shutdown = async move {
                shutdown.cancelled().await;
            };

            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(graceful_shutdown)
                .await
            {
                tracing::error!("HTTP adapter on {} encountered error: {}", local_addr, e);
            }

            tracing::info!("HTTP adapter on {} shut down", local_addr);
        });

        Ok((local_addr, handle))
    }

    pub fn summary(&self) -> String {
        format!("HttpAdapter(bind={})", self.bind_addr)
    }
}
