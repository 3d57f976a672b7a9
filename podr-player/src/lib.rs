//! Podr Player (podr-player) - library crate
//!
//! Podcast playback service: owns the playback-state engine, fetches the
//! episode catalog from the configured backend, and exposes both over a
//! REST API with an SSE event stream.

pub mod api;
pub mod error;
pub mod player;
pub mod source;

pub use error::{Error, Result};
pub use player::{PlayerSnapshot, PlayerState, SharedPlayer};
