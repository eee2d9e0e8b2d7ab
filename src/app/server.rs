use crate::adapters::http;
use crate::adapters::memory_store::InMemoryReceiptStore;
use crate::core::service::ReceiptService;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::validate_socket_addr;
use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builds the router over a fresh in-memory store.
pub async fn build_router(seed_example: bool) -> Router {
    let service = Arc::new(ReceiptService::new(InMemoryReceiptStore::new()));
    if seed_example {
        service.seed_example().await;
    }
    http::router(service)
}

pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(bind = %addr, "🚀 Receipt points service listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

pub async fn run<C: ConfigProvider>(config: &C) -> Result<()> {
    let addr = validate_socket_addr("bind_address", config.bind_address())?;
    let listener = TcpListener::bind(addr).await?;
    let router = build_router(config.seed_example()).await;

    serve(listener, router, shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("🛑 Shutdown signal received"),
        Err(e) => {
            // without a signal handler the server can only be killed
            tracing::warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
