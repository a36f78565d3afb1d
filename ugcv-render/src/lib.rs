//! # UGC Voice-over Render Library (ugcv-render)
//!
//! Turns a raw synthesized speech payload into a downloadable voice-over file.
//!
//! **Purpose:** Decode base64 PCM from the speech provider, apply the requested
//! playback speed, quantize back to 16-bit, and encode to MP3 (or WAV when no
//! MP3 encoder is available).
//!
//! **Architecture:** Synchronous single-pass pipeline:
//! decoder → resampler → quantizer → (MP3 encoder | WAV builder)

pub mod audio;
pub mod error;
pub mod pipeline;

pub use audio::types::{AudioBuffer, EncodedArtifact, SpeedFactor};
pub use error::{DecodeError, InvalidSpeed, RenderError, Result};
pub use pipeline::{render, render_detached, render_detailed, RenderOutput, RenderRequest, RenderStats};
pub use ugcv_common::OutputFormat;
