//! TUI mode for the chat room.
//!
//! The room runs on the in-process loopback broker: every message published
//! by this client is routed back to its subscriptions, which is enough to
//! exercise the whole session flow locally.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use gavel::telemetry::TracingTelemetrySink;
use gavel::tui::{
    ChatApp, ChatContext, set_chat_context, set_initial_terminal_size, set_telemetry_sink,
};
use gavel::{ClientError, GavelConfig, LoopbackBroker, MessagingTransport};

/// Runs the interactive chat room.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialise. Connection failures are
/// shown on the registration form instead.
pub async fn run(config: &GavelConfig) -> Result<(), ClientError> {
    let broker = LoopbackBroker::new();

    let _ = set_chat_context(chat_context(config, Arc::new(broker.client())));
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ClientError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Builds the start-up context from configuration.
///
/// The only bundled transport is the loopback broker, so the context is
/// always marked local-only.
#[must_use]
pub fn chat_context(config: &GavelConfig, transport: Arc<dyn MessagingTransport>) -> ChatContext {
    ChatContext {
        transport,
        endpoint: config.chat_endpoint.clone(),
        display_name: config.display_name().map(ToOwned::to_owned),
        local_only: true,
    }
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<ChatApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
