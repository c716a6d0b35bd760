//! Tracing subscriber initialisation.

use tracing_subscriber::{EnvFilter, fmt};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `debug` when `verbose` is set and
/// `info` when it is not. Logs are written to stderr so command output on
/// stdout stays clean.
///
/// # Errors
///
/// Returns error if the filter is invalid or a subscriber is already installed.
pub fn init_logging(
    verbose: bool,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }

    tracing::debug!(verbose, ?format, "Initialized logging");
    Ok(())
}
