//! Tracing subscriber setup for the CLI process.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

/// Available output formats for the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Pretty output for debug builds, JSON for release builds.
    pub(crate) const fn infer() -> Self {
        if cfg!(debug_assertions) {
            Self::Pretty
        } else {
            Self::Json
        }
    }
}

/// Default filter directive for a `-v` count; `RUST_LOG` takes precedence.
pub(crate) const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber writing to stderr so stdout stays machine-readable.
pub(crate) fn init_logging(verbosity: u8) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let builder = fmt::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match LogFormat::infer() {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    }
    .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
