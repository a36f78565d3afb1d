//! Voice-over renderer (ugcv-render) - Main entry point
//!
//! Reads a base64 PCM payload produced by the speech provider, renders it at
//! the requested speed, and writes `ugc-voiceover-<voice-label>.<ext>`.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::{info, warn};

use ugcv_common::config::{ConfigSource, TomlConfig};
use ugcv_common::voices::{resolve_label, VOICES};
use ugcv_common::{logging, OutputFormat};
use ugcv_render::audio::decoder::SOURCE_SAMPLE_RATE;
use ugcv_render::audio::encoder::mp3_available;
use ugcv_render::pipeline::render_detailed;
use ugcv_render::{RenderRequest, SpeedFactor};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ", ",
    env!("BUILD_PROFILE"),
    ", encoders: ",
    env!("BUILD_ENCODERS"),
    ")"
);

/// Command-line arguments for ugcv-render
#[derive(Parser, Debug)]
#[command(name = "ugcv-render")]
#[command(about = "Render synthesized speech into a downloadable voice-over file")]
#[command(version, long_version = LONG_VERSION)]
struct Args {
    /// File holding the base64 PCM payload ("-" or omitted reads stdin)
    #[arg(short, long, env = "UGCV_INPUT")]
    input: Option<PathBuf>,

    /// Playback speed, 0.5 to 2.0 (config default otherwise)
    #[arg(short, long)]
    speed: Option<f64>,

    /// Voice identifier or label, used to name the output file
    #[arg(short, long)]
    voice: Option<String>,

    /// Requested output format: mp3 or wav
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Directory that receives the rendered file
    #[arg(long, env = "UGCV_OUTPUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Exact output path (overrides the suggested filename)
    #[arg(short, long, conflicts_with = "out_dir")]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a JSON summary instead of the output path
    #[arg(long)]
    json: bool,

    /// List the built-in voices and exit
    #[arg(long)]
    list_voices: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (config, source) =
        TomlConfig::resolve(args.config.as_deref()).context("Failed to load config")?;

    logging::init_tracing(&config.logging.level);

    match &source {
        ConfigSource::MissingFile(path) => {
            warn!("Config file {} not found, using defaults", path.display())
        }
        _ => info!("Config: {}", source),
    }

    if args.list_voices {
        print_voices(args.json)?;
        return Ok(());
    }

    let speed_value = args.speed.unwrap_or(config.render.speed);
    let speed = SpeedFactor::new(speed_value).context("Invalid --speed")?;
    let format = args.format.unwrap_or(config.render.format);
    let voice = args.voice.unwrap_or_else(|| config.render.voice.clone());
    let label = resolve_label(&voice);

    if format == OutputFormat::Mp3 && !mp3_available(SOURCE_SAMPLE_RATE) {
        warn!("MP3 encoding not available in this build, output will be WAV");
    }

    let payload = read_payload(args.input.as_deref())?;
    let request = RenderRequest::new(payload, speed, format);
    let output = render_detailed(&request).context("Render failed")?;

    let path = match args.output {
        Some(path) => path,
        None => {
            let dir = args
                .out_dir
                .or_else(|| config.render.output_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            dir.join(output.artifact.suggested_filename(&label))
        }
    };

    write_artifact(&path, output.artifact.bytes())?;
    info!(
        "Wrote {} ({}, {} bytes)",
        path.display(),
        output.artifact.mime_type(),
        output.artifact.len()
    );

    if args.json {
        let summary = json!({
            "path": path,
            "voice": voice,
            "label": label,
            "stats": output.stats,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Read the payload from a file, or stdin for `None` / `-`
fn read_payload(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read payload from {}", path.display())),
        _ => {
            let mut payload = String::new();
            std::io::stdin()
                .read_to_string(&mut payload)
                .context("Failed to read payload from stdin")?;
            Ok(payload)
        }
    }
}

/// Write the artifact, replacing any earlier file at the same path
fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

fn print_voices(as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(VOICES)?);
        return Ok(());
    }

    for voice in VOICES {
        println!(
            "{:<8} {:<16} {:<7} {}",
            voice.name, voice.label, voice.gender, voice.style
        );
    }
    Ok(())
}
