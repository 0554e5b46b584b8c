//! dynomite_exporter
//!
//! Scrapes the dynomite stats endpoint on every request to the telemetry
//! path and serves the result in Prometheus text format.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use dynomite_core::error::{ExporterError, Result};
use dynomite_exporter::cli::Cli;
use dynomite_exporter::collector::{BuildInfoCollector, DynomiteCollector};
use dynomite_exporter::config::ExporterConfig;
use dynomite_exporter::registry::Registry;
use dynomite_exporter::{app_state, obs, router};

#[tokio::main]
async fn main() {
    let cfg = match Cli::parse().into_config() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("dynomite_exporter: {e}");
            std::process::exit(1);
        }
    };
    obs::logging::init(&cfg.log);

    if let Err(e) = run(cfg).await {
        tracing::error!(kind = e.kind().as_str(), error = %e, "error running HTTP server");
        std::process::exit(1);
    }
}

async fn run(cfg: ExporterConfig) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting dynomite_exporter");

    let listen = cfg.web.listen_addr()?;

    let mut registry = Registry::new();
    registry.register(Arc::new(BuildInfoCollector::new()))?;
    registry.register(Arc::new(DynomiteCollector::new(
        &cfg.dynomite.address,
        cfg.dynomite.timeout()?,
    )?))?;
    info!(address = %cfg.dynomite.address, timeout = %cfg.dynomite.timeout, "scraping dynomite");

    let state = app_state::AppState::new(cfg, registry);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {listen} failed: {e}")))?;
    info!(%listen, "listening on address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))?;

    info!("dynomite_exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
