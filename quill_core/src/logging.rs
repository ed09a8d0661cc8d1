//! Internal diagnostics for Quill itself.
//!
//! Provides centralized tracing setup for the workspace binaries. This is
//! the engine's own error channel; it is separate from the messages the
//! engine formats for its users.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize diagnostics with sensible defaults
///
/// Default level is WARN so the engine stays quiet inside host
/// applications; override with RUST_LOG.
pub fn init() {
    init_with_level("warn")
}

/// Initialize diagnostics with a specific default level
///
/// # Arguments
/// * `default_level` - Default log level (debug, info, warn, error)
///
/// This can still be overridden by the RUST_LOG environment variable.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
