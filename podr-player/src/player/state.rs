//! Playback state engine
//!
//! Owns the episode queue, the active index, and the play/loop/shuffle
//! flags, and derives navigability from them. All transitions are
//! synchronous in-memory mutations; the audio sink itself lives outside
//! this process and is only mirrored here (see `set_playing_state`).

use crate::error::{Error, Result};
use podr_common::Episode;
use rand::Rng;
use tracing::debug;

/// Playback state: queue, position, and mode flags
///
/// Invariants:
/// - `current_index < queue.len()` whenever the queue is non-empty
/// - `is_playing` is true only while a non-empty queue has a current episode
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Episodes loaded for playback, in play order
    queue: Vec<Episode>,

    /// Index of the current episode; meaningless while the queue is empty
    current_index: usize,

    /// Whether the external sink is actively outputting audio
    is_playing: bool,

    /// When true the sink restarts the current episode on completion
    is_looping: bool,

    /// When true "next" draws a random index instead of advancing
    is_shuffling: bool,
}

impl PlayerState {
    /// Create an empty player state (empty queue, all flags off)
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a single episode for playback
    ///
    /// Replaces the queue with just `episode` and resets the index.
    /// Does not start playback; the caller toggles play separately.
    pub fn play_single(&mut self, episode: Episode) {
        debug!("Staging single episode: {}", episode.id);
        self.queue = vec![episode];
        self.current_index = 0;
    }

    /// Replace the queue with `list` and start playing from `start_index`
    ///
    /// Rejects an empty list or an out-of-range index with
    /// `Error::InvalidIndex`, leaving prior state untouched.
    pub fn play_list(&mut self, list: Vec<Episode>, start_index: usize) -> Result<()> {
        if start_index >= list.len() {
            return Err(Error::InvalidIndex {
                index: start_index,
                len: list.len(),
            });
        }

        debug!(
            "Playing list of {} episodes from index {}",
            list.len(),
            start_index
        );
        self.queue = list;
        self.current_index = start_index;
        self.is_playing = true;
        Ok(())
    }

    /// Flip the playing flag
    ///
    /// No-op while the queue is empty: there is nothing to play, and the
    /// flag may not be true without a current episode.
    pub fn toggle_play(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        self.is_playing = !self.is_playing;
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// One-way state sync from the sink's own play/pause transitions
    ///
    /// The sink is authoritative for why it paused (user action, network
    /// stall); the engine simply mirrors the outcome. Setting `true` with
    /// an empty queue is ignored to keep the playing invariant.
    pub fn set_playing_state(&mut self, playing: bool) {
        if playing && self.queue.is_empty() {
            return;
        }
        self.is_playing = playing;
    }

    /// Advance to the next episode
    ///
    /// No-op when `has_next` is false. With shuffle on, draws a uniformly
    /// random index over the whole queue; the draw has no memory and may
    /// land on the current index again.
    pub fn play_next(&mut self) {
        if !self.has_next() {
            return;
        }

        if self.is_shuffling {
            self.current_index = rand::thread_rng().gen_range(0..self.queue.len());
        } else {
            self.current_index += 1;
        }
        debug!("Advanced to index {}", self.current_index);
    }

    /// Step back to the previous episode
    ///
    /// Always sequential; shuffle only randomizes forward progression.
    /// No-op at the head of the queue.
    pub fn play_previous(&mut self) {
        if !self.has_previous() {
            return;
        }
        self.current_index -= 1;
        debug!("Stepped back to index {}", self.current_index);
    }

    /// Empty the queue and reset the index
    ///
    /// Loop and shuffle are session-scoped user preferences and survive
    /// the clear; `is_playing` is forced off because an empty queue has
    /// nothing to play.
    pub fn clear(&mut self) {
        debug!("Clearing queue ({} episodes)", self.queue.len());
        self.queue.clear();
        self.current_index = 0;
        self.is_playing = false;
    }

    /// Reaction to the sink reporting natural end of media
    ///
    /// Looping restarts happen inside the sink and never reach this path;
    /// this is the non-looping exhaustion path: advance if possible,
    /// otherwise empty the queue.
    pub fn on_episode_ended(&mut self) {
        if self.has_next() {
            self.play_next();
        } else {
            self.clear();
        }
    }

    /// The episode at the current index, or None while the queue is empty
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.get(self.current_index)
    }

    /// Whether a forward transition is available
    ///
    /// Shuffle treats a non-empty queue as always having a next draw,
    /// even from the last position.
    pub fn has_next(&self) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.is_shuffling || self.current_index + 1 < self.queue.len()
    }

    /// Whether a backward transition is available
    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Whether the sink is actively outputting audio
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the current episode restarts on completion
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Whether "next" draws a random index
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Index of the current episode
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of episodes loaded for playback
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Episodes loaded for playback, in play order
    pub fn queue(&self) -> &[Episode] {
        &self.queue
    }
}
