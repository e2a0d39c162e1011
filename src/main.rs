//! Folio Contact - main entry point
//!
//! Loads configuration, builds the email provider client once and serves the
//! contact endpoints until Ctrl-C.

use anyhow::Result;
use folio_contact::server::{self, AppState};
use folio_contact::{
    Config, EmailProvider, Mailbox, Metrics, ResendClient, ResendEmailProvider, SubmissionService,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging is not up yet; LOG_LEVEL lives in the config we failed to load
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        "Starting contact service with provider URL: {}",
        config.resend_api_url
    );
    info!("Notifications go to {} recipient(s)", config.contact_to.len());

    let metrics = Metrics::new();

    // The provider client lives for the whole process and is shared by every request
    let client = ResendClient::new(&config).with_metrics(metrics.clone());
    let provider = Arc::new(ResendEmailProvider::new(client)) as Arc<dyn EmailProvider>;
    let service = SubmissionService::new(provider, Mailbox::from(&config));

    let state = AppState::new(service, metrics.clone());
    let router = server::router(state, config.static_dir.as_deref());

    if let Some(dir) = &config.static_dir {
        info!("Serving static site from {}", dir.display());
    }

    if let Err(e) = server::run_server(router, config.bind_addr).await {
        error!("Server error: {}", e);
        return Err(e);
    }

    let summary = metrics.summary();
    info!(
        received = summary.submissions_received_total,
        rejected = summary.submissions_rejected_total,
        sent = summary.emails_sent_total,
        failed = summary.send_failures_total,
        provider_avg_ms = summary.http_duration_avg_ms,
        "Contact service shutdown complete"
    );
    Ok(())
}
