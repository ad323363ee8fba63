//! Structured logging setup.
//!
//! The terminal UIs own the screen, so nothing is logged unless a log file is
//! configured. The filter is read from `GAVEL_LOG` and defaults to `info`.

use std::sync::Mutex;

use camino::Utf8Path;
use tracing_subscriber::EnvFilter;

use crate::error::ClientError;
use crate::local_files;

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "GAVEL_LOG";
const DEFAULT_DIRECTIVES: &str = "info";

/// Builds the log filter from `GAVEL_LOG`, falling back to `info` when the
/// variable is unset or invalid.
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber writing to `log_path`.
///
/// Returns `false` without installing anything when no path is given.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the log file cannot be opened, or
/// [`ClientError::Configuration`] when a global subscriber is already set.
pub fn init(log_path: Option<&Utf8Path>) -> Result<bool, ClientError> {
    let Some(path) = log_path else {
        return Ok(false);
    };
    let file = local_files::open_append(path)?.into_std();

    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|error| ClientError::Configuration {
            message: format!("failed to install logger: {error}"),
        })?;
    Ok(true)
}
