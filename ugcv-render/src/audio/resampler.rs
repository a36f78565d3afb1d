//! Time-stretch by rate scaling
//!
//! Changes the duration of a buffer by reading it with a cursor that advances
//! `speed` input samples per output sample. The sample rate is kept, so the
//! perceived pitch moves with the speed (same behavior as speeding up tape).
//!
//! Reads between two input samples use linear interpolation. Reads past the
//! last pair hold the final sample. The result is fully deterministic.

use crate::audio::types::{AudioBuffer, SpeedFactor};
use crate::error::{RenderError, Result};
use tracing::debug;

/// Relative distance below which a quotient counts as a whole number
const WHOLE_QUOTIENT_TOLERANCE: f64 = 1e-9;

/// Output length for `input_len` samples at `speed`: `ceil(input_len / speed)`.
///
/// Speeds like 0.7 have no exact binary form, so `21 / 0.7` evaluates to
/// 30.000000000000004. Quotients that close to a whole number are taken as
/// that number before rounding up.
pub fn stretched_len(input_len: usize, speed: SpeedFactor) -> usize {
    let exact = input_len as f64 / speed.value();
    let nearest = exact.round();

    if (exact - nearest).abs() <= WHOLE_QUOTIENT_TOLERANCE * exact.max(1.0) {
        nearest as usize
    } else {
        exact.ceil() as usize
    }
}

/// Resample `buffer` along a time axis scaled by `speed`.
///
/// At speed 1.0 the output equals the input sample for sample.
///
/// # Errors
/// [`RenderError::EmptyAudio`] if the output would contain no samples.
pub fn time_stretch(buffer: &AudioBuffer, speed: SpeedFactor) -> Result<AudioBuffer> {
    let input = buffer.samples();
    let output_len = stretched_len(input.len(), speed);

    if output_len == 0 {
        return Err(RenderError::EmptyAudio {
            source_samples: input.len(),
            speed: speed.value(),
        });
    }

    if speed.is_identity() {
        debug!("Speed 1.0x, skipping time-stretch");
        return Ok(buffer.clone());
    }

    let step = speed.value();
    let last = input.len() - 1;
    let mut output = Vec::with_capacity(output_len);

    for i in 0..output_len {
        let pos = i as f64 * step;
        let index = pos.floor() as usize;

        let sample = if index >= last {
            input[last]
        } else {
            let frac = (pos - index as f64) as f32;
            let a = input[index];
            let b = input[index + 1];
            a + (b - a) * frac
        };

        output.push(sample);
    }

    debug!(
        "Time-stretched {} samples to {} samples at {}x",
        input.len(),
        output.len(),
        step
    );

    Ok(AudioBuffer::new(output, buffer.sample_rate()))
}
