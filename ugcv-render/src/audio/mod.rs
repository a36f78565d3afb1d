//! Audio processing stages
//!
//! Each stage takes its input by reference and returns a fresh value.

pub mod decoder;
pub mod encoder;
pub mod quantizer;
pub mod resampler;
pub mod types;
pub mod wav;

pub use crate::error::DecodeError;
pub use decoder::{decode_pcm_base64, decode_pcm_bytes, SOURCE_SAMPLE_RATE};
pub use encoder::{EncoderStrategy, Mp3Encoder};
pub use quantizer::quantize;
pub use resampler::time_stretch;
pub use wav::build_wav;
