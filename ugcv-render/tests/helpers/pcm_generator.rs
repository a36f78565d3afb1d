//! Speech payload generation utilities
//!
//! Builds deterministic base64 PCM payloads in the speech provider's format
//! (16-bit LE, mono, 24 kHz) so tests can drive the full pipeline without a
//! synthesis service.

use base64::{engine::general_purpose, Engine as _};
use std::f32::consts::PI;

/// Speech provider sample rate
pub const TEST_SAMPLE_RATE: u32 = 24000;

/// Encode i16 samples as a base64 payload
pub fn encode_payload(samples: &[i16]) -> String {
    let bytes: Vec<u8> = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
    general_purpose::STANDARD.encode(bytes)
}

/// All-zero payload of `sample_count` samples
pub fn silent_payload(sample_count: usize) -> String {
    encode_payload(&vec![0i16; sample_count])
}

/// Linear ramp from -1.0 to 1.0 (i16::MIN to i16::MAX) over `sample_count` samples
pub fn ramp_samples(sample_count: usize) -> Vec<i16> {
    if sample_count < 2 {
        return vec![0; sample_count];
    }

    let span = i16::MAX as f64 - i16::MIN as f64;
    (0..sample_count)
        .map(|i| {
            let t = i as f64 / (sample_count - 1) as f64;
            (i16::MIN as f64 + t * span).round() as i16
        })
        .collect()
}

/// Ramp payload, see [`ramp_samples`]
pub fn ramp_payload(sample_count: usize) -> String {
    encode_payload(&ramp_samples(sample_count))
}

/// Sine tone payload
///
/// # Arguments
/// * `sample_count` - Number of samples
/// * `frequency_hz` - Tone frequency (e.g. 440.0)
/// * `amplitude` - Peak amplitude 0.0-1.0
pub fn sine_payload(sample_count: usize, frequency_hz: f32, amplitude: f32) -> String {
    let peak = amplitude * i16::MAX as f32;
    let samples: Vec<i16> = (0..sample_count)
        .map(|i| {
            let t = i as f32 / TEST_SAMPLE_RATE as f32;
            ((2.0 * PI * frequency_hz * t).sin() * peak) as i16
        })
        .collect();
    encode_payload(&samples)
}
