//! Configuration loading for the voice-over tools
//!
//! Settings come from a small TOML file. Resolution order for the file path:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. Platform config directory (`<config_dir>/ugcv/config.toml`)
//! 4. Built-in defaults (no file at all)
//!
//! A missing file never stops the tools: defaults apply and the caller is told
//! through [`ConfigSource`] so it can warn once logging is up. A file that
//! exists but cannot be read or parsed is an error.

use crate::voices::{default_voice, OutputFormat};
use crate::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "UGCV_CONFIG";

/// Slowest accepted playback speed
pub const MIN_SPEED: f64 = 0.5;

/// Fastest accepted playback speed
pub const MAX_SPEED: f64 = 2.0;

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file
    File(PathBuf),

    /// This file was named (CLI or environment) but does not exist
    MissingFile(PathBuf),

    /// No file was named and none exists in the platform config directory
    BuiltIn,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::MissingFile(path) => write!(f, "{} (missing, using defaults)", path.display()),
            ConfigSource::BuiltIn => write!(f, "built-in defaults"),
        }
    }
}

/// Top-level TOML configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Render defaults (optional)
    #[serde(default)]
    pub render: RenderSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Default render parameters, overridable per invocation
#[derive(Debug, Clone, Deserialize)]
pub struct RenderSettings {
    /// Playback speed factor in [0.5, 2.0]
    #[serde(default = "default_speed")]
    pub speed: f64,

    /// Requested output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Voice identifier or label
    #[serde(default = "default_voice_name")]
    pub voice: String,

    /// Directory that receives rendered files (current directory if unset)
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            speed: default_speed(),
            format: OutputFormat::default(),
            voice: default_voice_name(),
            output_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_speed() -> f64 {
    1.0
}

fn default_voice_name() -> String {
    default_voice().name.to_string()
}

impl TomlConfig {
    /// Parse configuration from TOML text and validate it
    pub fn parse(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file location and load it.
    ///
    /// A missing file yields defaults. A file that exists but cannot be read
    /// is an [`Error::Io`]; one that cannot be parsed is an [`Error::Config`].
    /// Logging is not initialized yet when this runs, so nothing is logged
    /// here; the returned [`ConfigSource`] tells the caller what happened.
    pub fn resolve(cli_arg: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let Some(path) = resolve_config_path(cli_arg, CONFIG_ENV_VAR) else {
            return Ok((Self::default(), ConfigSource::BuiltIn));
        };

        match Self::read_if_present(&path)? {
            Some(config) => Ok((config, ConfigSource::File(path))),
            None => Ok((Self::default(), ConfigSource::MissingFile(path))),
        }
    }

    fn read_if_present(path: &Path) -> Result<Option<Self>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        let speed = self.render.speed;
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(Error::Config(format!(
                "render.speed must be within [{}, {}], got {}",
                MIN_SPEED, MAX_SPEED, speed
            )));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(Error::Config(format!(
                "logging.level '{}' is not one of trace, debug, info, warn, error",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Resolve the config file path following the priority order above.
///
/// Explicit paths (CLI or environment) are returned even if the file is
/// missing so the caller can warn about them; the platform default is only
/// returned when it exists.
pub fn resolve_config_path(cli_arg: Option<&Path>, env_var_name: &str) -> Option<PathBuf> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return Some(path.to_path_buf());
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(env_var_name) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    // Priority 3: Platform config directory
    default_config_path().filter(|path| path.exists())
}

/// Platform config file location (`~/.config/ugcv/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ugcv").join("config.toml"))
}
