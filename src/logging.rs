//! Logging setup.
//!
//! Installs a global tracing subscriber writing to stderr, so stdout stays
//! reserved for the computed tag. `RUST_LOG` refines the filter unless
//! verbose mode forces debug output.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{NextTagError, Result};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(default_directive(true));
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(false)))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.verbose))
        .with_writer(std::io::stderr);

    let installed = match (config.format, config.verbose) {
        (LogFormat::Json, _) => builder.json().try_init(),
        (LogFormat::Text, true) => builder.try_init(),
        (LogFormat::Text, false) => builder.without_time().with_target(false).try_init(),
    };

    installed.map_err(|e| NextTagError::config(format!("cannot install logger: {}", e)))
}
