//! Uncompressed WAV container builder
//!
//! Canonical 44-byte RIFF/WAVE header for 16-bit mono PCM followed by the
//! samples in little-endian order.
//!
//! ```text
//! offset  size  field
//!  0      4     "RIFF"
//!  4      4     36 + data length
//!  8      4     "WAVE"
//! 12      4     "fmt "
//! 16      4     16 (fmt chunk size)
//! 20      2     1 (PCM)
//! 22      2     1 (channels)
//! 24      4     sample rate
//! 28      4     byte rate (sample rate * 2)
//! 32      2     block align (2)
//! 34      2     bits per sample (16)
//! 36      4     "data"
//! 40      4     data length (2 * samples)
//! 44      ...   samples
//! ```

use tracing::debug;

/// Size of the canonical PCM WAV header
pub const WAV_HEADER_LEN: usize = 44;

const BITS_PER_SAMPLE: u16 = 16;
const BYTES_PER_SAMPLE: u32 = (BITS_PER_SAMPLE / 8) as u32;
const CHANNELS: u16 = 1;
const FORMAT_PCM: u16 = 1;

/// Exact byte length of a WAV built from `sample_count` samples
pub fn wav_len(sample_count: usize) -> usize {
    WAV_HEADER_LEN + sample_count * BYTES_PER_SAMPLE as usize
}

/// Build a mono 16-bit WAV file in memory
pub fn build_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() as u32) * BYTES_PER_SAMPLE;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate * block_align as u32;

    let mut wav = Vec::with_capacity(wav_len(samples.len()));

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    debug!(
        "Built WAV container: {} samples, {} bytes",
        samples.len(),
        wav.len()
    );

    wav
}
