//! Server-Sent Events stream
//!
//! Forwards PlayerEvents from the broadcast bus to connected clients.
//! Lagging receivers skip dropped events and keep streaming.

use crate::api::AppState;
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// GET /api/v1/events - SSE stream of player events
pub async fn event_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("New SSE client connected");
    let mut rx = state.player.events().subscribe();

    let stream = async_stream::stream! {
        // Initial connection marker so clients can confirm the stream
        yield Ok(Event::default().event("ConnectionStatus").data("connected"));

        loop {
            match rx.recv().await {
                Ok(event) => match serde_json::to_string(&event) {
                    Ok(json) => {
                        debug!("SSE: forwarding event");
                        yield Ok(Event::default().event("PlayerEvent").data(json));
                    }
                    Err(e) => {
                        warn!("SSE: failed to serialize event: {}", e);
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    warn!("SSE: client lagged, {} events skipped", skipped);
                }
                Err(RecvError::Closed) => {
                    info!("SSE: event bus closed, ending stream");
                    break;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("heartbeat"),
    )
}
