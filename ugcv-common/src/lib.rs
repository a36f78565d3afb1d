//! # UGC Voice-over Common Library
//!
//! Shared code for the voice-over render tools including:
//! - Error types
//! - TOML configuration loading
//! - Logging bootstrap
//! - Voice catalog and download filename rules

pub mod config;
pub mod error;
pub mod logging;
pub mod voices;

pub use error::{Error, Result};
pub use voices::{OutputFormat, VoiceOption};
