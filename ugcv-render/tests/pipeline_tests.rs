//! End-to-end render pipeline tests
//!
//! **Test Coverage:**
//! - Silent and ramp payloads through decode → stretch → quantize → encode
//! - WAV artifacts validated independently with hound
//! - Speed handling at the range limits
//! - Fatal error paths (no artifact returned)
//! - Independence of repeated and overlapping renders

mod helpers;

use helpers::pcm_generator::{encode_payload, ramp_payload, silent_payload, sine_payload, TEST_SAMPLE_RATE};
use std::io::Cursor;
use ugcv_render::audio::resampler::stretched_len;
use ugcv_render::{render, render_detailed, DecodeError, OutputFormat, RenderError, RenderRequest, SpeedFactor};

fn read_wav(bytes: &[u8]) -> (hound::WavSpec, Vec<i16>) {
    let reader = hound::WavReader::new(Cursor::new(bytes.to_vec())).expect("valid WAV");
    let spec = reader.spec();
    let samples = reader
        .into_samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .expect("readable samples");
    (spec, samples)
}

fn speed(value: f64) -> SpeedFactor {
    SpeedFactor::new(value).unwrap()
}

#[test]
fn test_two_seconds_of_silence_to_wav() {
    let request = RenderRequest::new(silent_payload(48000), SpeedFactor::IDENTITY, OutputFormat::Wav);
    let artifact = render(&request).unwrap();

    assert_eq!(artifact.mime_type(), "audio/wav");
    assert_eq!(artifact.len(), 96044);

    let (spec, samples) = read_wav(artifact.bytes());
    assert_eq!(spec.sample_rate, TEST_SAMPLE_RATE);
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, hound::SampleFormat::Int);
    assert_eq!(samples.len(), 48000);
    assert!(samples.iter().all(|&s| s == 0));
}

#[cfg(not(feature = "mp3"))]
#[test]
fn test_mp3_request_degrades_to_wav_without_encoder() {
    let request = RenderRequest::new(silent_payload(48000), SpeedFactor::IDENTITY, OutputFormat::Mp3);
    let artifact = render(&request).unwrap();

    assert_eq!(artifact.mime_type(), "audio/wav");
    assert_eq!(artifact.len(), 96044);
    assert_eq!(artifact.suggested_filename("Hype Guy"), "ugc-voiceover-hype-guy.wav");
}

#[cfg(feature = "mp3")]
#[test]
fn test_mp3_request_produces_mp3() {
    let request = RenderRequest::new(sine_payload(24000, 440.0, 0.5), SpeedFactor::IDENTITY, OutputFormat::Mp3);
    let artifact = render(&request).unwrap();

    assert_eq!(artifact.mime_type(), "audio/mp3");
    assert_eq!(artifact.suggested_filename("Hype Guy"), "ugc-voiceover-hype-guy.mp3");
    // 1 s at 128 kbps is roughly 16 KB; a WAV of the same audio would be 48 KB
    assert!(artifact.len() > 4_000 && artifact.len() < 40_000, "got {} bytes", artifact.len());
}

#[test]
fn test_ramp_at_double_speed() {
    let request = RenderRequest::new(ramp_payload(24000), speed(2.0), OutputFormat::Wav);
    let output = render_detailed(&request).unwrap();

    assert_eq!(output.stats.source_samples, 24000);
    assert_eq!(output.stats.output_samples, 12000);

    let (spec, samples) = read_wav(output.artifact.bytes());
    assert_eq!(spec.sample_rate, TEST_SAMPLE_RATE);
    assert_eq!(samples.len(), 12000);

    let min = *samples.iter().min().unwrap();
    let max = *samples.iter().max().unwrap();
    assert_eq!(min, -32767);
    assert!(max > 32700, "max = {}", max);

    // Still monotonic after stretching
    assert!(samples.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_half_speed_doubles_duration() {
    let request = RenderRequest::new(sine_payload(12000, 220.0, 0.8), speed(0.5), OutputFormat::Wav);
    let output = render_detailed(&request).unwrap();

    assert_eq!(output.stats.output_samples, 24000);
    assert!((output.stats.duration_seconds - 1.0).abs() < 1e-9);
    assert_eq!(output.artifact.len(), 44 + 2 * 24000);
}

#[test]
fn test_output_samples_stay_in_range() {
    // Full-scale square wave: interpolation between extremes must never wrap
    let samples: Vec<i16> = (0..4801).map(|i| if (i / 7) % 2 == 0 { i16::MAX } else { i16::MIN }).collect();

    for value in [0.5, 0.7, 1.3, 1.9, 2.0] {
        let request = RenderRequest::new(encode_payload(&samples), speed(value), OutputFormat::Wav);
        let artifact = render(&request).unwrap();
        let (_, rendered) = read_wav(artifact.bytes());

        assert!(rendered.iter().all(|&s| s >= -32767), "speed {}", value);
        assert_eq!(rendered.len(), stretched_len(4801, speed(value)), "speed {}", value);
    }
}

#[test]
fn test_odd_length_payload_fails() {
    use base64::{engine::general_purpose, Engine as _};
    let payload = general_purpose::STANDARD.encode([1u8, 2, 3, 4, 5]);

    let err = render(&RenderRequest::new(payload, SpeedFactor::IDENTITY, OutputFormat::Wav)).unwrap_err();
    assert!(matches!(err, RenderError::Decode(DecodeError::OddLength(5))));
}

#[test]
fn test_garbage_payload_fails() {
    let err = render(&RenderRequest::new("%%% not audio %%%", speed(1.2), OutputFormat::Mp3)).unwrap_err();
    assert!(matches!(err, RenderError::Decode(DecodeError::Base64(_))));
}

#[test]
fn test_single_sample_survives_max_speed() {
    let request = RenderRequest::new(encode_payload(&[1234]), speed(2.0), OutputFormat::Wav);
    let artifact = render(&request).unwrap();
    assert_eq!(artifact.len(), 46);
}

#[test]
fn test_repeated_renders_are_identical() {
    let request = RenderRequest::new(sine_payload(9000, 330.0, 0.6), speed(1.4), OutputFormat::Wav);
    let first = render(&request).unwrap();
    let second = render(&request).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_overlapping_renders_are_independent() {
    let slow = RenderRequest::new(sine_payload(24000, 200.0, 0.5), speed(0.5), OutputFormat::Wav);
    let fast = RenderRequest::new(sine_payload(24000, 200.0, 0.5), speed(2.0), OutputFormat::Wav);

    let expected_slow = render(&slow).unwrap();
    let expected_fast = render(&fast).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let request = if i % 2 == 0 { slow.clone() } else { fast.clone() };
            std::thread::spawn(move || render(&request).unwrap())
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let artifact = handle.join().unwrap();
        let expected = if i % 2 == 0 { &expected_slow } else { &expected_fast };
        assert_eq!(&artifact, expected);
    }
}
