//! Playback state engine and its shared async wrapper

pub mod shared;
pub mod state;

pub use shared::{PlayerSnapshot, SharedPlayer};
pub use state::PlayerState;
