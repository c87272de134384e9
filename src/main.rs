// img2text - image description relay over the Pollinations API

use anyhow::Result;
use clap::Parser;
use img2text::cli::Args;
use img2text::config::AppConfig;
use img2text::models::ModelRegistry;
use img2text::pollinations::PollinationsClient;
use img2text::server::create_router;
use img2text::storage::UploadStore;
use img2text::utils::logging;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Phase 1: Load configuration
    let config = AppConfig::load(args.config.as_deref())?;

    // Phase 2: Initialize logging
    logging::init(&config.logging)?;
    info!("Starting img2text v{}", env!("CARGO_PKG_VERSION"));

    if config.upstream.api_key.is_empty() {
        warn!("No upstream API key configured (POLLINATIONS_API_KEY); upstream may reject requests");
    }

    // Phase 3: Build the model registry and upstream client
    let registry = ModelRegistry::from_config(&config.upstream);
    info!("Model aliases: {}", registry.aliases().join(", "));
    let client = PollinationsClient::new(&config.upstream, registry)?;

    // Phase 4: Open the upload store
    let uploads = UploadStore::new(&config.storage.upload_dir)?;
    info!("Uploads stored in {}", uploads.dir().display());

    // Phase 5: Build and start HTTP server
    let app = create_router(config.clone(), client, uploads)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Phase 6: Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received SIGTERM signal");
        },
    }
}
