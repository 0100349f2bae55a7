mod ats;
mod config;
mod errors;
mod export;
mod models;
mod render;
mod resume;
mod review;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::export::CommandPdfExporter;
use crate::resume::persistence::FileStore;
use crate::resume::ResumeStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Local key/value store (the saved resume lives under `resumeData`)
    let kv = Arc::new(FileStore::new(&config.storage_dir));
    info!("Storage directory: {}", config.storage_dir.display());

    // Restore once at startup; unreadable data falls back to placeholders
    let store = ResumeStore::restore_or_default(kv.as_ref()).await;

    // PDF converter (external process)
    let exporter = Arc::new(CommandPdfExporter::new(config.pdf_converter.clone()));
    info!(
        "PDF converter: {} (premium: {})",
        config.pdf_converter, config.export_premium
    );

    let state = AppState::new(store, kv, exporter, config.clone());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
