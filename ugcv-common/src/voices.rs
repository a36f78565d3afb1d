//! Voice catalog and download naming
//!
//! The voice identifier only matters to the upstream speech provider. The
//! render pipeline carries its human label through to the suggested
//! download filename (`ugc-voiceover-<label>.<ext>`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every suggested download filename
pub const FILENAME_PREFIX: &str = "ugc-voiceover";

/// A prebuilt voice offered by the speech provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    /// Provider identifier, sent to the synthesis call
    pub name: &'static str,

    /// Human-readable persona name shown to users
    pub label: &'static str,

    pub gender: &'static str,

    pub style: &'static str,
}

/// Built-in voice personas. The first entry is the default selection.
pub const VOICES: &[VoiceOption] = &[
    VoiceOption { name: "Kore", label: "Bestie Vibes", gender: "Female", style: "Firm" },
    VoiceOption { name: "Puck", label: "Hype Guy", gender: "Male", style: "Upbeat" },
    VoiceOption { name: "Zephyr", label: "Morning Glow", gender: "Female", style: "Bright" },
    VoiceOption { name: "Charon", label: "Honest Review", gender: "Male", style: "Informative" },
    VoiceOption { name: "Fenrir", label: "Unboxing Rush", gender: "Male", style: "Excitable" },
    VoiceOption { name: "Aoede", label: "Soft Sell", gender: "Female", style: "Breezy" },
];

/// Default voice (first catalog entry)
pub fn default_voice() -> &'static VoiceOption {
    &VOICES[0]
}

/// Find a voice by provider name or label, ignoring ASCII case
pub fn find_voice(query: &str) -> Option<&'static VoiceOption> {
    let query = query.trim();
    VOICES
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(query) || v.label.eq_ignore_ascii_case(query))
}

/// Resolve the label used for naming a download.
///
/// Voice identifiers are opaque: anything not in the catalog is used as its own label.
pub fn resolve_label(voice: &str) -> String {
    match find_voice(voice) {
        Some(option) => option.label.to_string(),
        None => voice.to_string(),
    }
}

/// Lowercase the label and replace every whitespace run with a single hyphen.
///
/// Runs at either end are replaced as well, so `" Soft  Sell"` becomes `"-soft-sell"`.
pub fn label_slug(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut in_whitespace = false;

    for ch in label.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }

    slug
}

/// Suggested download filename for an artifact of the given format
pub fn suggested_filename(label: &str, format: OutputFormat) -> String {
    format!("{}-{}.{}", FILENAME_PREFIX, label_slug(label), format.extension())
}

/// Artifact container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy MP3 (nominal output)
    #[default]
    Mp3,

    /// Uncompressed 16-bit PCM WAV (fallback output)
    Wav,
}

impl OutputFormat {
    /// MIME tag attached to artifacts of this format
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "audio/mp3",
            OutputFormat::Wav => "audio/wav",
        }
    }

    /// File extension (without dot)
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Mp3 => "mp3",
            OutputFormat::Wav => "wav",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mp3" | "audio/mp3" | "audio/mpeg" => Ok(OutputFormat::Mp3),
            "wav" | "audio/wav" | "audio/wave" => Ok(OutputFormat::Wav),
            other => Err(format!("unknown output format '{}' (expected mp3 or wav)", other)),
        }
    }
}
