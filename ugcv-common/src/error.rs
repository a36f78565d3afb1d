//! Common error types for the voice-over tools

use thiserror::Error;

/// Common result type for shared operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the voice-over crates
#[derive(Error, Debug)]
pub enum Error {
    /// A config file exists but could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
