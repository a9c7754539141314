use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise only errors are logged, or
/// everything from this tool at debug level with `--verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let default_directive = if verbose {
        "otelcol_config=debug,otelcol_core=debug,otelcol_fs=debug"
    } else {
        "error"
    };

    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| CliError::user(format!("invalid log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::user(format!("failed to initialise logging: {e}")))?;

    tracing::debug!("Verbose mode enabled");
    Ok(())
}
