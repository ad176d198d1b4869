use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod engine;
mod handlers;
mod middleware;
mod server;

/// Shared application state available to every handler via `State<Arc<AppState>>`.
pub struct AppState {
    /// Process-wide counters and the simulated workload.
    pub engine: Arc<engine::LoadEngine>,

    /// Short random id telling instances apart behind the balancer.
    pub instance_id: String,

    /// Port this instance was configured with, echoed by `/api/instance`.
    pub port: u16,
}

impl AppState {
    pub fn new(port: u16) -> Self {
        Self {
            engine: Arc::new(engine::LoadEngine::new()),
            instance_id: uuid::Uuid::new_v4().to_string()[..8].to_owned(),
            port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── 1. Configuration ─────────────────────────────────────────
    let config = config::Config::parse();

    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║   ⚖️   LOAD-BALANCER PROBE                        ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();

    // ── 2. Build shared state ────────────────────────────────────
    let state = Arc::new(AppState::new(config.port));
    tracing::info!(
        instance_id = %state.instance_id,
        started_at = %state.engine.started_at().to_rfc3339(),
        "load engine initialized"
    );

    // ── 3. Build Axum router ─────────────────────────────────────
    let app = server::create_router(state.clone());

    // ── 4. Bind & serve ──────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(%local_addr, instance_id = %state.instance_id, "lb-probe listening");
    println!("Instance info   → http://{local_addr}/api/instance");
    println!("Test            → http://{local_addr}/api/test");
    println!("Heavy (POST)    → http://{local_addr}/api/heavy?iterations=1000");
    println!("Custom metrics  → http://{local_addr}/api/metrics/custom");
    println!();

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(instance_id = %state.instance_id, "lb-probe stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on unix (what orchestrators send).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
