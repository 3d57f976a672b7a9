//! # Podr Common Library
//!
//! Shared code for the Podr podcast player:
//! - Episode model and upstream record mapping
//! - Event types (PlayerEvent enum) and EventBus
//! - Configuration resolution
//! - Time display formatting

pub mod config;
pub mod episode;
pub mod error;
pub mod events;
pub mod time;

pub use episode::Episode;
pub use error::{Error, Result};
