//! Event types for the Podr event system
//!
//! Provides the shared event definitions and EventBus used to fan player
//! state transitions out to SSE subscribers.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Player event types
///
/// Events are broadcast via EventBus and serialized for SSE transmission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerEvent {
    /// `is_playing` changed (user toggle or sink reconciliation)
    PlaybackChanged {
        playing: bool,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// The queue was replaced wholesale (play single / play list)
    QueueReplaced {
        queue_len: usize,
        current_index: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// The current episode moved (next/previous/ended/clear)
    ///
    /// `episode_id` is None when the queue became empty.
    EpisodeChanged {
        episode_id: Option<String>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Loop or shuffle preference changed
    ModeChanged {
        looping: bool,
        shuffling: bool,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

/// Central event distribution bus
///
/// Uses tokio::broadcast internally, providing:
/// - Non-blocking publish (slow subscribers don't block producers)
/// - Multiple concurrent subscribers
/// - Automatic cleanup when subscribers drop
/// - Lagged message detection for slow subscribers
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<PlayerEvent>,
    capacity: usize,
}

impl EventBus {
    /// Create a new EventBus with the specified channel capacity
    ///
    /// `capacity` bounds how many events are buffered before old events
    /// are dropped for lagging subscribers.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    ///
    /// Events emitted before subscription are not received.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.tx.subscribe()
    }

    /// Emit an event to all current subscribers
    ///
    /// Returns the number of subscribers that received the event.
    /// Emitting with no subscribers is not an error.
    pub fn emit(&self, event: PlayerEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Number of currently connected subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_event_bus_delivers_to_subscriber() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.emit(PlayerEvent::PlaybackChanged {
            playing: true,
            timestamp: chrono::Utc::now(),
        });

        match rx.recv().await.unwrap() {
            PlayerEvent::PlaybackChanged { playing, .. } => assert!(playing),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_emit_without_subscribers_is_ok() {
        let bus = EventBus::new(16);
        let delivered = bus.emit(PlayerEvent::EpisodeChanged {
            episode_id: None,
            timestamp: chrono::Utc::now(),
        });
        assert_eq!(delivered, 0);
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = PlayerEvent::ModeChanged {
            looping: true,
            shuffling: false,
            timestamp: chrono::Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"ModeChanged\""));
    }
}
