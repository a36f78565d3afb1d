//! Float to 16-bit PCM quantization
//!
//! Each sample is clamped to [-1.0, 1.0] and scaled by 32767, rounding half
//! away from zero. Out-of-range input from callers building their own buffers
//! saturates silently. NaN maps to 0.

use crate::audio::types::AudioBuffer;

/// Scale applied after clamping; symmetric, so -1.0 maps to -32767
const QUANTIZE_SCALE: f32 = 32767.0;

/// Quantize one normalized sample
#[inline]
pub fn quantize_sample(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * QUANTIZE_SCALE).round() as i16
}

/// Quantize a whole buffer. Never fails; an empty buffer yields an empty vector.
pub fn quantize(buffer: &AudioBuffer) -> Vec<i16> {
    buffer.samples().iter().map(|&s| quantize_sample(s)).collect()
}
