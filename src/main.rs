//! Gavel CLI entrypoint.
//!
//! Loads layered configuration, installs file logging when requested, and
//! dispatches to the operation mode selected by the configuration.

use std::io::{self, Write};
use std::process::ExitCode;

use gavel::{ClientError, GavelConfig, OperationMode, logging};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ClientError> {
    let config = load_config()?;
    config.validate()?;

    if logging::init(config.log_path())? {
        tracing::info!(mode = ?config.operation_mode(), "gavel starting");
    }

    match config.operation_mode() {
        OperationMode::ReviewRender => cli::review_render::run(&config),
        OperationMode::ChatRoom => cli::chat_tui::run(&config).await,
        OperationMode::SearchListing => cli::search_listing::run(&config).await,
        OperationMode::SearchTui => cli::search_tui::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ClientError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<GavelConfig, ClientError> {
    GavelConfig::load().map_err(|error| ClientError::Configuration {
        message: error.to_string(),
    })
}
