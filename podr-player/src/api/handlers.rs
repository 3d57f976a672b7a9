//! HTTP request handlers
//!
//! Implements the REST endpoints for the episode catalog and player
//! control. Navigation no-ops are not errors: the handler simply returns
//! the unchanged player snapshot.

use crate::api::AppState;
use crate::error::Error;
use crate::player::PlayerSnapshot;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use podr_common::episode::Episode;
use podr_common::time::{format_duration, format_published_at};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

// ============================================================================
// Request/Response Types
// ============================================================================

/// Episode as served to clients, with display-formatted fields
#[derive(Debug, Serialize)]
pub struct EpisodeView {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    pub description: String,
    pub duration: u64,
    pub duration_as_string: String,
    pub url: String,
}

impl From<Episode> for EpisodeView {
    fn from(episode: Episode) -> Self {
        Self {
            id: episode.id,
            title: episode.title,
            members: episode.members,
            published_at: format_published_at(episode.published_at),
            thumbnail: episode.thumbnail,
            description: episode.description,
            duration: episode.duration,
            duration_as_string: format_duration(episode.duration),
            url: episode.url,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EpisodeListResponse {
    pub episodes: Vec<EpisodeView>,
}

#[derive(Debug, Deserialize)]
pub struct PlayListRequest {
    pub episodes: Vec<Episode>,
    pub start_index: usize,
}

#[derive(Debug, Deserialize)]
pub struct SinkPlayingRequest {
    pub playing: bool,
}

// ============================================================================
// Error Mapping
// ============================================================================

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::InvalidIndex { .. } => StatusCode::BAD_REQUEST,
            Error::Source(_) => StatusCode::BAD_GATEWAY,
        };
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

// ============================================================================
// Episode Catalog Endpoints
// ============================================================================

/// GET /api/v1/episodes - Full episode catalog, newest first
pub async fn get_episodes(
    State(state): State<AppState>,
) -> Result<Json<EpisodeListResponse>, Error> {
    let episodes = state.source.fetch_catalog().await.map_err(|e| {
        error!("Catalog fetch failed: {}", e);
        e
    })?;

    Ok(Json(EpisodeListResponse {
        episodes: episodes.into_iter().map(EpisodeView::from).collect(),
    }))
}

/// GET /api/v1/episodes/latest - The most recent episodes
pub async fn get_latest_episodes(
    State(state): State<AppState>,
) -> Result<Json<EpisodeListResponse>, Error> {
    let episodes = state.source.fetch_latest().await.map_err(|e| {
        error!("Latest fetch failed: {}", e);
        e
    })?;

    Ok(Json(EpisodeListResponse {
        episodes: episodes.into_iter().map(EpisodeView::from).collect(),
    }))
}

// ============================================================================
// Player Endpoints
// ============================================================================

/// GET /api/v1/player - Full observable player state
pub async fn get_player(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/play - Stage a single episode
pub async fn play_single(
    State(state): State<AppState>,
    Json(episode): Json<Episode>,
) -> Json<PlayerSnapshot> {
    state.player.play_single(episode).await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/play-list - Replace the queue and start playback
pub async fn play_list(
    State(state): State<AppState>,
    Json(request): Json<PlayListRequest>,
) -> Result<Json<PlayerSnapshot>, Error> {
    state
        .player
        .play_list(request.episodes, request.start_index)
        .await?;
    Ok(Json(state.player.snapshot().await))
}

/// POST /api/v1/player/next - Advance to the next episode
pub async fn play_next(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.play_next().await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/previous - Step back to the previous episode
pub async fn play_previous(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.play_previous().await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/toggle-play
pub async fn toggle_play(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.toggle_play().await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/toggle-loop
pub async fn toggle_loop(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.toggle_loop().await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/toggle-shuffle
pub async fn toggle_shuffle(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.toggle_shuffle().await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/clear - Empty the queue
pub async fn clear(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    state.player.clear().await;
    Json(state.player.snapshot().await)
}

// ============================================================================
// Sink Reconciliation Endpoints
// ============================================================================

/// POST /api/v1/player/sink/playing - Mirror the sink's play/pause state
///
/// The sink is authoritative for actual play/pause transitions (a network
/// stall pauses it outside user action); this is a one-way sync.
pub async fn sink_playing(
    State(state): State<AppState>,
    Json(request): Json<SinkPlayingRequest>,
) -> Json<PlayerSnapshot> {
    state.player.set_playing_state(request.playing).await;
    Json(state.player.snapshot().await)
}

/// POST /api/v1/player/sink/ended - Sink reported natural end of media
pub async fn sink_ended(State(state): State<AppState>) -> Json<PlayerSnapshot> {
    info!("Sink reported end of media");
    state.player.on_episode_ended().await;
    Json(state.player.snapshot().await)
}
