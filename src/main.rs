use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use portfolio_site::{
    background_task::start_flash_eviction_task,
    build_server,
    db::sqlite::{create_pool, init_schema},
    graceful_shutdown::shutdown_signal,
    settings::AppConfig,
    telemetry::init_tracing,
    AppState,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::new().context("Configuration error")?;
    init_tracing(&config);
    if !config.is_production() {
        tracing::info!("Loaded configuration: {:?}", config);
    }

    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("Failed to open the database")?;

    init_schema(&pool)
        .await
        .context("Failed to initialize the database schema")?;

    let state = web::Data::new(AppState::new(&config, pool));

    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr)
        .with_context(|| format!("Failed to bind {server_addr}"))?;

    tracing::info!(
        "Starting {} v{} on http://{}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    tokio::spawn(start_flash_eviction_task(state.clone()));

    let server = build_server(state.clone(), listener, config.worker_count)?;
    let handle = server.handle();

    tokio::select! {
        res = server => res?,
        reason = shutdown_signal() => {
            tracing::warn!(%reason, "Shutdown requested, draining connections...");
            handle.stop(true).await;
        }
    }

    tracing::info!(
        unread_flash_messages = state.flash.pending(),
        "Server stopped"
    );
    Ok(())
}
