//! Error types for ugcv-render
//!
//! Only two conditions fail a render: a malformed payload ([`DecodeError`]) and
//! a resample that collapses to zero samples ([`RenderError::EmptyAudio`]).
//! A missing or failing MP3 encoder is a logged degradation, never an error.

use thiserror::Error;

/// Payload decoding failures
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Payload is empty or decodes to zero bytes
    #[error("speech payload is empty")]
    Empty,

    /// Payload is not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Byte count is not a whole number of 16-bit samples
    #[error("PCM payload has odd length of {0} bytes")]
    OddLength(usize),
}

/// Main error type for a render invocation
#[derive(Error, Debug)]
pub enum RenderError {
    /// Malformed or absent input bytes
    #[error("Audio decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Time-stretch produced no samples
    #[error("Resampling {source_samples} samples at speed {speed}x produced no audio")]
    EmptyAudio { source_samples: usize, speed: f64 },
}

/// Rejected speed factor (outside [0.5, 2.0] or not finite)
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Speed factor {0} is outside the supported range [0.5, 2.0]")]
pub struct InvalidSpeed(pub f64);

/// Convenience Result type using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;
