//! MP3 artifact reader
//!
//! Decodes rendered MP3 bytes with symphonia so tests can check the audio
//! itself rather than just byte counts.

use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded mono or multi-channel audio (interleaved f32)
pub struct DecodedMp3 {
    pub sample_rate: u32,
    pub channels: usize,
    pub samples: Vec<f32>,
}

impl DecodedMp3 {
    /// Largest absolute sample value
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }

    /// Number of samples whose magnitude exceeds `threshold`
    pub fn count_above(&self, threshold: f32) -> usize {
        self.samples.iter().filter(|s| s.abs() > threshold).count()
    }
}

/// Decode a complete MP3 byte stream.
///
/// Panics if the bytes are not a readable MP3 stream.
pub fn decode_mp3(bytes: &[u8]) -> DecodedMp3 {
    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes.to_vec())), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("mp3");

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .expect("probe MP3 stream");
    let mut format = probed.format;

    let track = format.default_track().expect("MP3 audio track");
    let track_id = track.id;
    let codec_params = track.codec_params.clone();

    let mut decoder = symphonia::default::get_codecs()
        .make(&codec_params, &DecoderOptions::default())
        .expect("create MP3 decoder");

    let mut sample_rate = codec_params.sample_rate.unwrap_or(0);
    let mut channels = codec_params.channels.map(|c| c.count()).unwrap_or(0);
    let mut samples = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(SymphoniaError::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
            Err(e) => panic!("read MP3 packet: {:?}", e),
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(decoded) => decoded,
            // A frame depending on missing bit reservoir data is skippable
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(e) => panic!("decode MP3 packet: {:?}", e),
        };

        let spec = *decoded.spec();
        sample_rate = spec.rate;
        channels = spec.channels.count();

        let mut buffer = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        buffer.copy_interleaved_ref(decoded);
        samples.extend_from_slice(buffer.samples());
    }

    DecodedMp3 {
        sample_rate,
        channels,
        samples,
    }
}
