//! Speech payload decoder
//!
//! The speech provider returns raw PCM as a base64 string:
//! - 16-bit signed little-endian samples
//! - Mono
//! - 24 000 Hz
//!
//! Samples are normalized by dividing by 32768.0, so the output range is
//! [-1.0, 32767/32768].

use crate::audio::types::AudioBuffer;
use crate::error::DecodeError;
use base64::{engine::general_purpose, Engine as _};
use tracing::debug;

/// Sample rate of the speech provider's PCM output
pub const SOURCE_SAMPLE_RATE: u32 = 24000;

/// Divisor mapping i16 to [-1.0, 1.0)
const NORMALIZE_DIVISOR: f32 = 32768.0;

/// Decode a base64 PCM payload into a 24 kHz mono buffer.
///
/// Surrounding ASCII whitespace is ignored.
pub fn decode_pcm_base64(payload: &str) -> Result<AudioBuffer, DecodeError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(DecodeError::Empty);
    }

    let bytes = general_purpose::STANDARD.decode(payload)?;
    decode_pcm_bytes(&bytes, SOURCE_SAMPLE_RATE)
}

/// Reinterpret raw little-endian 16-bit PCM bytes as normalized samples
pub fn decode_pcm_bytes(bytes: &[u8], sample_rate: u32) -> Result<AudioBuffer, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::Empty);
    }
    if bytes.len() % 2 != 0 {
        return Err(DecodeError::OddLength(bytes.len()));
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / NORMALIZE_DIVISOR)
        .collect();

    debug!(
        "Decoded {} bytes into {} samples at {}Hz",
        bytes.len(),
        samples.len(),
        sample_rate
    );

    Ok(AudioBuffer::new(samples, sample_rate))
}
