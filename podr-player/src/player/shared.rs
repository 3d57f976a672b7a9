//! Shared player state
//!
//! Wraps the playback state engine behind `Arc<RwLock<..>>` so HTTP
//! handlers and the SSE stream can share one session-lifetime instance,
//! and emits `PlayerEvent`s after every observable transition.

use crate::error::Result;
use crate::player::state::PlayerState;
use podr_common::episode::Episode;
use podr_common::events::{EventBus, PlayerEvent};
use podr_common::time::format_duration;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Serializable snapshot of the observable player state
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    pub current_episode: Option<Episode>,
    pub current_index: usize,
    pub queue_len: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
    pub has_next: bool,
    pub has_previous: bool,
    /// Current episode duration as HH:MM:SS, for display
    pub duration_as_string: Option<String>,
}

/// Shared playback state with event emission
#[derive(Clone)]
pub struct SharedPlayer {
    inner: Arc<RwLock<PlayerState>>,
    events: EventBus,
}

impl SharedPlayer {
    pub fn new(events: EventBus) -> Self {
        Self {
            inner: Arc::new(RwLock::new(PlayerState::new())),
            events,
        }
    }

    /// Snapshot the full observable state
    pub async fn snapshot(&self) -> PlayerSnapshot {
        let state = self.inner.read().await;
        PlayerSnapshot {
            current_episode: state.current_episode().cloned(),
            current_index: state.current_index(),
            queue_len: state.queue_len(),
            is_playing: state.is_playing(),
            is_looping: state.is_looping(),
            is_shuffling: state.is_shuffling(),
            has_next: state.has_next(),
            has_previous: state.has_previous(),
            duration_as_string: state
                .current_episode()
                .map(|e| format_duration(e.duration)),
        }
    }

    /// Stage a single episode (no playback intent)
    pub async fn play_single(&self, episode: Episode) {
        let episode_id = episode.id.clone();
        {
            let mut state = self.inner.write().await;
            state.play_single(episode);
        }
        info!("Staged episode {}", episode_id);
        self.emit_queue_replaced(1, 0).await;
        self.events.emit(PlayerEvent::EpisodeChanged {
            episode_id: Some(episode_id),
            timestamp: chrono::Utc::now(),
        });
    }

    /// Replace the queue and start playing from `start_index`
    pub async fn play_list(&self, list: Vec<Episode>, start_index: usize) -> Result<()> {
        let (queue_len, episode_id) = {
            let mut state = self.inner.write().await;
            state.play_list(list, start_index)?;
            (
                state.queue_len(),
                state.current_episode().map(|e| e.id.clone()),
            )
        };
        info!(
            "Playing list of {} episodes from index {}",
            queue_len, start_index
        );
        self.emit_queue_replaced(queue_len, start_index).await;
        self.events.emit(PlayerEvent::EpisodeChanged {
            episode_id,
            timestamp: chrono::Utc::now(),
        });
        self.events.emit(PlayerEvent::PlaybackChanged {
            playing: true,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    /// Flip the playing flag
    pub async fn toggle_play(&self) {
        let (before, after) = {
            let mut state = self.inner.write().await;
            let before = state.is_playing();
            state.toggle_play();
            (before, state.is_playing())
        };
        if before != after {
            self.events.emit(PlayerEvent::PlaybackChanged {
                playing: after,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Flip the loop flag
    pub async fn toggle_loop(&self) {
        let (looping, shuffling) = {
            let mut state = self.inner.write().await;
            state.toggle_loop();
            (state.is_looping(), state.is_shuffling())
        };
        self.emit_mode_changed(looping, shuffling);
    }

    /// Flip the shuffle flag
    pub async fn toggle_shuffle(&self) {
        let (looping, shuffling) = {
            let mut state = self.inner.write().await;
            state.toggle_shuffle();
            (state.is_looping(), state.is_shuffling())
        };
        self.emit_mode_changed(looping, shuffling);
    }

    /// Mirror the sink's actual play/pause state
    pub async fn set_playing_state(&self, playing: bool) {
        let (before, after) = {
            let mut state = self.inner.write().await;
            let before = state.is_playing();
            state.set_playing_state(playing);
            (before, state.is_playing())
        };
        if before != after {
            self.events.emit(PlayerEvent::PlaybackChanged {
                playing: after,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Advance to the next episode (no-op when nothing is next)
    pub async fn play_next(&self) {
        let changed = {
            let mut state = self.inner.write().await;
            let before = state.current_index();
            state.play_next();
            (before != state.current_index())
                .then(|| state.current_episode().map(|e| e.id.clone()))
        };
        if let Some(episode_id) = changed {
            self.events.emit(PlayerEvent::EpisodeChanged {
                episode_id,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Step back to the previous episode (no-op at the head)
    pub async fn play_previous(&self) {
        let changed = {
            let mut state = self.inner.write().await;
            let before = state.current_index();
            state.play_previous();
            (before != state.current_index())
                .then(|| state.current_episode().map(|e| e.id.clone()))
        };
        if let Some(episode_id) = changed {
            self.events.emit(PlayerEvent::EpisodeChanged {
                episode_id,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Empty the queue
    pub async fn clear(&self) {
        let was_playing = {
            let mut state = self.inner.write().await;
            let was_playing = state.is_playing();
            state.clear();
            was_playing
        };
        info!("Queue cleared");
        self.emit_queue_replaced(0, 0).await;
        self.events.emit(PlayerEvent::EpisodeChanged {
            episode_id: None,
            timestamp: chrono::Utc::now(),
        });
        if was_playing {
            self.events.emit(PlayerEvent::PlaybackChanged {
                playing: false,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Sink reported natural end of media
    pub async fn on_episode_ended(&self) {
        let (queue_len, episode_id, was_playing, is_playing) = {
            let mut state = self.inner.write().await;
            let was_playing = state.is_playing();
            state.on_episode_ended();
            (
                state.queue_len(),
                state.current_episode().map(|e| e.id.clone()),
                was_playing,
                state.is_playing(),
            )
        };
        if queue_len == 0 {
            info!("Queue exhausted");
            self.emit_queue_replaced(0, 0).await;
        }
        self.events.emit(PlayerEvent::EpisodeChanged {
            episode_id,
            timestamp: chrono::Utc::now(),
        });
        // Exhaustion clears the queue and with it the playing flag
        if was_playing && !is_playing {
            self.events.emit(PlayerEvent::PlaybackChanged {
                playing: false,
                timestamp: chrono::Utc::now(),
            });
        }
    }

    /// Event bus handle for SSE subscription
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    async fn emit_queue_replaced(&self, queue_len: usize, current_index: usize) {
        self.events.emit(PlayerEvent::QueueReplaced {
            queue_len,
            current_index,
            timestamp: chrono::Utc::now(),
        });
    }

    fn emit_mode_changed(&self, looping: bool, shuffling: bool) {
        self.events.emit(PlayerEvent::ModeChanged {
            looping,
            shuffling,
            timestamp: chrono::Utc::now(),
        });
    }
}
