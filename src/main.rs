use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

mod api;
mod config;
mod sizing;
mod state;

#[cfg(test)]
mod tests;

use config::AppConfig;
use sizing::{CapacityTable, SearchEngine};
pub(crate) use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cabinet_optimizer=info,tower_http=info".into()),
        )
        .init();

    info!("Cabinet Optimizer v{} starting up", env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!(
        "Configuration loaded: bind={}, capacity_data={}, defaults={} RU / {} kW @ {}% RU, {}% power",
        config.bind_addr(),
        config.capacity_data_path,
        config.cabinet_ru,
        config.cabinet_power_kw,
        config.ru_percent,
        config.power_percent
    );

    // Loaded once; every search shares it read-only.
    let capacity = Arc::new(CapacityTable::load(Path::new(&config.capacity_data_path)));
    let engine = SearchEngine::new(capacity, config.max_cabinet_ru);

    let state = Arc::new(AppState::new(config.clone(), engine));
    let app = api::router(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;
    info!("Listening on {}", bind_addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("Cabinet Optimizer shut down cleanly");
    Ok(())
}

/// Wait for SIGTERM or SIGINT for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { warn!("Received Ctrl+C, shutting down..."); },
        () = terminate => { warn!("Received SIGTERM, shutting down..."); },
    }
}
