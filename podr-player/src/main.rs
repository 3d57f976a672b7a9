//! Podr Player (podr-player) - Main entry point
//!
//! Podcast playback service: hosts the playback-state engine and the
//! REST API for episode browsing and player control. Audio output itself
//! happens in the client; this process is the state owner the client's
//! sink reconciles against.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use podr_common::events::EventBus;
use podr_player::api;
use podr_player::player::SharedPlayer;
use podr_player::source::EpisodeSource;

/// Command-line arguments for podr-player
#[derive(Parser, Debug)]
#[command(name = "podr-player")]
#[command(about = "Podcast playback service for Podr")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5750", env = "PODR_PORT")]
    port: u16,

    /// Episode source backend URL
    #[arg(short, long, env = "PODR_BACKEND_URL")]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podr_player=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command-line arguments
    let args = Args::parse();

    let backend_url =
        podr_common::config::resolve_backend_url(args.backend_url.as_deref(), "PODR_BACKEND_URL");

    info!("Starting Podr Player on port {}", args.port);
    info!("Episode source backend: {}", backend_url);

    // Session-lifetime player state and event bus
    let events = EventBus::new(1000);
    let player = SharedPlayer::new(events);
    let source = EpisodeSource::new(backend_url);

    // Build the application router
    let app_state = api::AppState {
        player,
        source,
        port: args.port,
    };

    let app = api::create_router(app_state);

    // Create socket address
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    info!("Starting HTTP server on {}", addr);

    // Create and run the server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
