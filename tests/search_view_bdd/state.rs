//! Scenario state and command driving for the search view BDD tests.

use std::sync::Arc;
use std::time::Duration;

use bubbletea_rs::Model;
use gavel::telemetry::test_support::RecordingTelemetrySink;
use gavel::tui::{SearchApp, SearchMsg};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use super::runtime::{SharedRuntime, ensure_runtime};

/// Upper bound on a single page load against the mock server.
const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(ScenarioState, Default)]
pub(crate) struct SearchViewState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) app: Slot<SearchApp>,
    pub(crate) telemetry: Slot<Arc<RecordingTelemetrySink>>,
}

/// Starts the runtime and the auction mock server on first use.
pub(crate) fn ensure_runtime_and_server(state: &SearchViewState) -> SharedRuntime {
    let runtime = ensure_runtime(&state.runtime);
    if state.server.with_ref(|_| ()).is_none() {
        state.server.set(runtime.block_on(MockServer::start()));
    }
    runtime
}

/// Sends `msg` to the view and runs every command it produces until the
/// view settles.
pub(crate) fn dispatch(state: &SearchViewState, msg: &SearchMsg) {
    let runtime = ensure_runtime(&state.runtime);
    state
        .app
        .with_mut(|app| {
            let mut pending = app.handle_message(msg);
            while let Some(cmd) = pending.take() {
                pending = runtime
                    .block_on_within(COMMAND_TIMEOUT, cmd)
                    .unwrap_or_else(|| panic!("page load did not finish in time"))
                    .and_then(|next| app.update(next));
            }
        })
        .unwrap_or_else(|| panic!("search view not started"));
}

/// Renders the current frame.
pub(crate) fn rendered_view(state: &SearchViewState) -> String {
    state
        .app
        .with_ref(SearchApp::view)
        .unwrap_or_else(|| panic!("search view not started"))
}
