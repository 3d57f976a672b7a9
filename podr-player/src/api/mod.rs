//! REST API implementation for the Podr player
//!
//! Exposes the episode catalog, the playback-state engine operations,
//! and an SSE event stream.

pub mod handlers;
pub mod sse;

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::player::SharedPlayer;
use crate::source::EpisodeSource;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared playback state
    pub player: SharedPlayer,
    /// Episode source backend client
    pub source: EpisodeSource,
    /// Server port
    pub port: u16,
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no prefix for health endpoint)
        .route("/health", get(health_check))
        // API v1 routes
        .nest(
            "/api/v1",
            Router::new()
                // Episode catalog endpoints
                .route("/episodes", get(handlers::get_episodes))
                .route("/episodes/latest", get(handlers::get_latest_episodes))
                // Player state and transitions
                .route("/player", get(handlers::get_player))
                .route("/player/play", post(handlers::play_single))
                .route("/player/play-list", post(handlers::play_list))
                .route("/player/next", post(handlers::play_next))
                .route("/player/previous", post(handlers::play_previous))
                .route("/player/toggle-play", post(handlers::toggle_play))
                .route("/player/toggle-loop", post(handlers::toggle_loop))
                .route("/player/toggle-shuffle", post(handlers::toggle_shuffle))
                .route("/player/clear", post(handlers::clear))
                // Sink reconciliation callbacks
                .route("/player/sink/playing", post(handlers::sink_playing))
                .route("/player/sink/ended", post(handlers::sink_ended))
                // SSE events
                .route("/events", get(sse::event_stream)),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "module": "podr-player",
        "version": env!("CARGO_PKG_VERSION"),
        "port": state.port,
    }))
}
