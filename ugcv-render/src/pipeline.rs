//! Render pipeline orchestration
//!
//! One render: decode → time-stretch → quantize → encode.
//!
//! Renders are independent and stateless. Nothing is cached between calls, and
//! a render has no cancellation point: it runs to completion or fails. Callers
//! that lose interest in a result (e.g. the user re-triggered generation) simply
//! drop it.

use crate::audio::decoder::decode_pcm_base64;
use crate::audio::encoder::EncoderStrategy;
use crate::audio::quantizer::quantize;
use crate::audio::resampler::time_stretch;
use crate::audio::types::{EncodedArtifact, SpeedFactor};
use crate::error::Result;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span};
use ugcv_common::OutputFormat;
use uuid::Uuid;

/// Input to one render
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Base64 PCM (16-bit LE, mono, 24 kHz) from the speech provider
    pub payload: String,

    pub speed: SpeedFactor,

    /// Requested format. MP3 may degrade to WAV; WAV is always honored.
    pub output: OutputFormat,
}

impl RenderRequest {
    pub fn new(payload: impl Into<String>, speed: SpeedFactor, output: OutputFormat) -> Self {
        Self {
            payload: payload.into(),
            speed,
            output,
        }
    }
}

/// Summary of what a render did
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderStats {
    pub source_samples: usize,
    pub output_samples: usize,
    pub sample_rate: u32,
    pub speed: f64,
    pub duration_seconds: f64,
    pub requested: OutputFormat,
    pub produced: OutputFormat,
    pub mime_type: &'static str,
    pub bytes: usize,
}

/// Artifact plus its render summary
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub artifact: EncodedArtifact,
    pub stats: RenderStats,
}

/// Run the full pipeline and return the artifact.
///
/// # Errors
/// - [`RenderError::Decode`](crate::RenderError::Decode) for an empty, non-base64, or odd-length payload
/// - [`RenderError::EmptyAudio`](crate::RenderError::EmptyAudio) if time-stretching leaves no samples
pub fn render(request: &RenderRequest) -> Result<EncodedArtifact> {
    render_detailed(request).map(|output| output.artifact)
}

/// Run the full pipeline and return the artifact with a summary
pub fn render_detailed(request: &RenderRequest) -> Result<RenderOutput> {
    let render_id = Uuid::new_v4();
    let span = info_span!("render", id = %render_id, speed = request.speed.value());
    let _guard = span.enter();

    let decoded = decode_pcm_base64(&request.payload)?;
    let stretched = time_stretch(&decoded, request.speed)?;
    let quantized = quantize(&stretched);
    debug!("Quantized {} samples", quantized.len());

    let strategy = EncoderStrategy::select(request.output, stretched.sample_rate());
    let artifact = strategy.encode(&quantized, stretched.sample_rate());

    let stats = RenderStats {
        source_samples: decoded.len(),
        output_samples: quantized.len(),
        sample_rate: stretched.sample_rate(),
        speed: request.speed.value(),
        duration_seconds: stretched.duration_seconds(),
        requested: request.output,
        produced: artifact.format(),
        mime_type: artifact.mime_type(),
        bytes: artifact.len(),
    };

    info!(
        "Rendered {:.2}s voice-over: {} ({} bytes)",
        stats.duration_seconds, stats.mime_type, stats.bytes
    );

    Ok(RenderOutput { artifact, stats })
}

/// Run a render on tokio's blocking pool.
///
/// For async callers that must not stall their executor. Dropping the handle
/// detaches the render; its result is then discarded.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub fn render_detached(request: RenderRequest) -> JoinHandle<Result<EncodedArtifact>> {
    tokio::task::spawn_blocking(move || render(&request))
}
