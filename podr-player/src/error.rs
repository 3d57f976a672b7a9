//! Error types for podr-player
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation.

use thiserror::Error;

/// Main error type for the podr-player module
#[derive(Error, Debug)]
pub enum Error {
    /// play_list called with an empty list or an out-of-range start index
    #[error("Invalid start index {index} for list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Episode source fetch or decode failure
    #[error("Episode source error: {0}")]
    Source(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Source(err.to_string())
    }
}

/// Convenience Result type using podr-player Error
pub type Result<T> = std::result::Result<T, Error>;
