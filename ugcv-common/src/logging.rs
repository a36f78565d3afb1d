//! Tracing subscriber bootstrap shared by the binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the log filter: `RUST_LOG` when set, otherwise `default_level` for
/// the voice-over crates.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("ugcv_render={level},ugcv_common={level}", level = default_level).into()
    })
}

/// Install the global tracing subscriber, writing to stderr.
///
/// Returns `false` if a subscriber was already installed (e.g. in tests).
pub fn init_tracing(default_level: &str) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
