//! Output encoding strategies
//!
//! Two strategies produce the final artifact:
//! - [`EncoderStrategy::Lossy`]: MP3 via LAME, 128 kbps mono, fed in blocks of
//!   1152 samples (one MPEG-1 Layer III frame, two MPEG-2 granules) and
//!   finished with a flush.
//! - [`EncoderStrategy::Uncompressed`]: 16-bit PCM WAV.
//!
//! The strategy is chosen once per render. The lossy strategy is only
//! available when the `mp3` feature is enabled and LAME accepts the
//! configuration; otherwise selection falls back to WAV.

use crate::audio::types::EncodedArtifact;
use crate::audio::wav::build_wav;
use thiserror::Error;
use tracing::{debug, warn};
use ugcv_common::OutputFormat;

#[cfg(feature = "mp3")]
use mp3lame_encoder::{max_required_buffer_size, Bitrate, Builder, FlushGap, MonoPcm, Quality};

/// Samples handed to the encoder per call
pub const FRAME_BLOCK_SAMPLES: usize = 1152;

/// Constant MP3 bitrate
pub const TARGET_BITRATE_KBPS: u32 = 128;

/// MP3 encoder failures. These never escape a render: the pipeline
/// degrades to WAV instead.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// Encoder could not be created or configured
    #[error("MP3 encoder setup failed: {0}")]
    Setup(String),

    /// Encoder rejected a block or the final flush
    #[error("MP3 encoding failed: {0}")]
    Encode(String),
}

/// LAME-backed MP3 encoder for one render
pub struct Mp3Encoder {
    #[cfg(feature = "mp3")]
    inner: mp3lame_encoder::Encoder,

    sample_rate: u32,
}

impl std::fmt::Debug for Mp3Encoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mp3Encoder")
            .field("sample_rate", &self.sample_rate)
            .field("bitrate_kbps", &TARGET_BITRATE_KBPS)
            .finish()
    }
}

impl Mp3Encoder {
    /// Try to create an encoder for mono audio at `sample_rate`.
    ///
    /// Returns `None` when MP3 support is not compiled in or LAME rejects the
    /// configuration.
    pub fn probe(sample_rate: u32) -> Option<Self> {
        match Self::create(sample_rate) {
            Ok(encoder) => Some(encoder),
            Err(e) => {
                debug!("MP3 encoder unavailable: {}", e);
                None
            }
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    #[cfg(feature = "mp3")]
    fn create(sample_rate: u32) -> Result<Self, EncodeError> {
        let setup = |e: mp3lame_encoder::BuildError| EncodeError::Setup(format!("{:?}", e));

        let mut builder = Builder::new()
            .ok_or_else(|| EncodeError::Setup("LAME failed to allocate encoder".to_string()))?;
        builder.set_num_channels(1).map_err(setup)?;
        builder.set_sample_rate(sample_rate).map_err(setup)?;
        builder.set_brate(Bitrate::Kbps128).map_err(setup)?;
        builder.set_quality(Quality::Good).map_err(setup)?;
        let inner = builder.build().map_err(setup)?;

        Ok(Self { inner, sample_rate })
    }

    #[cfg(not(feature = "mp3"))]
    fn create(_sample_rate: u32) -> Result<Self, EncodeError> {
        Err(EncodeError::Setup(
            "built without the `mp3` feature".to_string(),
        ))
    }

    /// Encode all samples block by block, then flush the encoder.
    ///
    /// The flush pads the final partial frame and drains LAME's lookahead, so
    /// the tail of the clip is always written. Consumes the encoder: LAME
    /// cannot accept input after a flush.
    #[cfg(feature = "mp3")]
    pub fn encode(mut self, samples: &[i16]) -> Result<Vec<u8>, EncodeError> {
        let mut output = Vec::with_capacity(max_required_buffer_size(samples.len()));

        for block in samples.chunks(FRAME_BLOCK_SAMPLES) {
            output.reserve(max_required_buffer_size(block.len()));
            self.inner
                .encode_to_vec(MonoPcm(block), &mut output)
                .map_err(|e| EncodeError::Encode(format!("{:?}", e)))?;
        }

        output.reserve(max_required_buffer_size(FRAME_BLOCK_SAMPLES));
        self.inner
            .flush_to_vec::<FlushGap>(&mut output)
            .map_err(|e| EncodeError::Encode(format!("flush: {:?}", e)))?;

        debug!(
            "Encoded {} samples into {} MP3 bytes ({} blocks)",
            samples.len(),
            output.len(),
            samples.len().div_ceil(FRAME_BLOCK_SAMPLES)
        );

        Ok(output)
    }

    #[cfg(not(feature = "mp3"))]
    pub fn encode(self, _samples: &[i16]) -> Result<Vec<u8>, EncodeError> {
        Err(EncodeError::Encode(
            "built without the `mp3` feature".to_string(),
        ))
    }
}

/// Whether the lossy encoder can be used at `sample_rate`
pub fn mp3_available(sample_rate: u32) -> bool {
    Mp3Encoder::probe(sample_rate).is_some()
}

/// How a render turns quantized samples into an artifact
#[derive(Debug)]
pub enum EncoderStrategy {
    /// MP3, tagged `audio/mp3`
    Lossy(Mp3Encoder),

    /// WAV, tagged `audio/wav`
    Uncompressed,
}

impl EncoderStrategy {
    /// Pick the strategy for a requested format.
    ///
    /// MP3 requests fall back to WAV (with a warning) when no encoder is available.
    pub fn select(requested: OutputFormat, sample_rate: u32) -> Self {
        match requested {
            OutputFormat::Wav => EncoderStrategy::Uncompressed,
            OutputFormat::Mp3 => match Mp3Encoder::probe(sample_rate) {
                Some(encoder) => EncoderStrategy::Lossy(encoder),
                None => {
                    warn!("MP3 encoder unavailable, falling back to WAV output");
                    EncoderStrategy::Uncompressed
                }
            },
        }
    }

    /// Format this strategy produces when encoding succeeds
    pub fn format(&self) -> OutputFormat {
        match self {
            EncoderStrategy::Lossy(_) => OutputFormat::Mp3,
            EncoderStrategy::Uncompressed => OutputFormat::Wav,
        }
    }

    /// Produce the artifact.
    ///
    /// An MP3 failure mid-encode degrades to WAV rather than failing the render.
    pub fn encode(self, samples: &[i16], sample_rate: u32) -> EncodedArtifact {
        match self {
            EncoderStrategy::Lossy(encoder) => match encoder.encode(samples) {
                Ok(bytes) => EncodedArtifact::new(bytes, OutputFormat::Mp3),
                Err(e) => {
                    warn!("{}, falling back to WAV output", e);
                    EncodedArtifact::new(build_wav(samples, sample_rate), OutputFormat::Wav)
                }
            },
            EncoderStrategy::Uncompressed => {
                EncodedArtifact::new(build_wav(samples, sample_rate), OutputFormat::Wav)
            }
        }
    }
}
