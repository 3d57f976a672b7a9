//! Common error types for Podr

use thiserror::Error;

/// Common result type for Podr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types shared across Podr crates
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
