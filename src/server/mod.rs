//! HTTP server for the contact endpoints.
//!
//! Routes:
//! - `/api/send-email`: submission handler, light email theme
//! - `/api/emails-api`: submission handler, dark email theme
//! - `/health`: liveness probe
//!
//! With a static directory configured, every other path is served from it.

pub mod handlers;

use crate::metrics::Metrics;
use crate::services::SubmissionService;
use anyhow::Result;
use axum::routing::{any, get};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: SubmissionService,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(service: SubmissionService, metrics: Metrics) -> Self {
        Self { service, metrics }
    }
}

/// Build the application router.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/send-email", any(handlers::send_email))
        .route("/api/emails-api", any(handlers::emails_api))
        .route("/health", get(handlers::health));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Serve `router` on `addr` until Ctrl-C.
pub async fn run_server(router: Router, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Contact server listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
