//! Core audio data types
//!
//! Defines the buffers and values passed between pipeline stages.

use crate::error::InvalidSpeed;
use ugcv_common::config::{MAX_SPEED, MIN_SPEED};
use ugcv_common::voices::suggested_filename;
use ugcv_common::OutputFormat;

/// Normalized mono audio produced by one pipeline stage.
///
/// **Format:**
/// - Samples are f32, nominally in -1.0 to 1.0
/// - Always mono
/// - Immutable once built; later stages produce new buffers
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl AudioBuffer {
    /// Channel count, fixed for this pipeline
    pub const CHANNELS: u16 = 1;

    /// Create a buffer from mono samples.
    ///
    /// # Panics
    /// Panics if `sample_rate` is zero.
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Self {
        assert!(sample_rate > 0, "sample rate must be positive");
        Self {
            samples,
            sample_rate,
        }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channels(&self) -> u16 {
        Self::CHANNELS
    }

    /// Number of samples (equal to frames for mono)
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get duration in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Playback speed multiplier in [0.5, 2.0]; 1.0 leaves audio untouched.
///
/// Values above 1.0 shorten the audio (and raise its pitch), values below
/// lengthen it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SpeedFactor(f64);

impl SpeedFactor {
    /// Unchanged duration
    pub const IDENTITY: SpeedFactor = SpeedFactor(1.0);

    /// Validate a speed factor
    pub fn new(value: f64) -> Result<Self, InvalidSpeed> {
        if value.is_finite() && (MIN_SPEED..=MAX_SPEED).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidSpeed(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_identity(self) -> bool {
        self.0 == 1.0
    }
}

impl Default for SpeedFactor {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TryFrom<f64> for SpeedFactor {
    type Error = InvalidSpeed;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Terminal pipeline output: encoded bytes tagged with their container format.
///
/// Produced fresh per render and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedArtifact {
    bytes: Vec<u8>,
    format: OutputFormat,
}

impl EncodedArtifact {
    pub fn new(bytes: Vec<u8>, format: OutputFormat) -> Self {
        Self { bytes, format }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// `audio/mp3` or `audio/wav`
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Download name for this artifact, e.g. `ugc-voiceover-hype-guy.mp3`
    pub fn suggested_filename(&self, voice_label: &str) -> String {
        suggested_filename(voice_label, self.format)
    }
}
