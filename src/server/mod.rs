//! Axum-based HTTP server for the gallery feed.

pub mod handlers;
pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerConfig;

pub use handlers::AppState;
pub use routes::create_router;

/// Bind and serve until ctrl-c.
pub async fn run(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .context("Invalid HTTP listen address")?;

    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&addr)
        .await
        .context("Failed to bind HTTP server")?;

    info!("Gallery feed listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("HTTP server shutting down");
}
