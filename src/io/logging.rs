//! Diagnostic output through `tracing`

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEBUG_LOG_DIRECTIVE, DEFAULT_LOG_DIRECTIVE, VERBOSE_LOG_DIRECTIVE};

/// Log directive for the number of `-v` flags given
pub const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_DIRECTIVE,
        1 => VERBOSE_LOG_DIRECTIVE,
        _ => DEBUG_LOG_DIRECTIVE,
    }
}

/// Build the filter: `RUST_LOG` when set and valid, the verbosity default otherwise
pub fn filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install a stderr subscriber
///
/// A subscriber that is already installed is kept.
pub fn init(verbosity: u8) {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(error) = installed {
        tracing::debug!("subscriber already installed: {error}");
    }
}
