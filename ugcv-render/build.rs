//! Build script for ugcv-render
//!
//! Stamps the binary with what it was built from and what it can produce.
//! The encoder list matters in the field: a build without the `mp3` feature
//! silently renders every request as WAV, and `--version` is the quickest way
//! to tell the two apart.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rustc-env=GIT_HASH={}", git_revision());
    println!("cargo:rustc-env=BUILD_DATE={}", build_date());
    println!(
        "cargo:rustc-env=BUILD_PROFILE={}",
        env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string())
    );
    println!("cargo:rustc-env=BUILD_ENCODERS={}", encoders().join("+"));

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../.git/HEAD");
}

/// Short commit hash with a `-dirty` marker, or "unknown" outside a checkout
fn git_revision() -> String {
    let Some(hash) = git(&["rev-parse", "--short=8", "HEAD"]) else {
        return "unknown".to_string();
    };

    match git(&["status", "--porcelain", "--untracked-files=no"]) {
        Some(changes) if !changes.is_empty() => format!("{}-dirty", hash),
        _ => hash,
    }
}

fn git(args: &[&str]) -> Option<String> {
    Command::new("git")
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
}

/// UTC build date; day resolution keeps rebuilds of one commit comparable
fn build_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Output formats this build can encode
fn encoders() -> Vec<&'static str> {
    let mut encoders = Vec::new();
    if env::var_os("CARGO_FEATURE_MP3").is_some() {
        encoders.push("mp3");
    }
    encoders.push("wav");
    encoders
}
