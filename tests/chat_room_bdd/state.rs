//! Scenario state and command driving for the chat room BDD tests.

use std::time::Duration;

use bubbletea_rs::{Cmd, Model};
use gavel::chat::Subscription;
use gavel::tui::ChatApp;
use gavel::{ChatSession, LoopbackBroker};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;

use super::runtime::{SharedRuntime, ensure_runtime};

pub(crate) const ENDPOINT: &str = "http://localhost:8080/ws";

/// Upper bound on how long a pump may wait for the next payload.
const PUMP_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(ScenarioState, Default)]
pub(crate) struct ChatRoomState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) broker: Slot<LoopbackBroker>,
    pub(crate) refusing: Slot<bool>,
    pub(crate) app: Slot<ChatApp>,
    pub(crate) pump: Slot<Cmd>,
    pub(crate) peer_session: Slot<ChatSession>,
    pub(crate) peer_feed: Slot<Subscription>,
    pub(crate) peer_private: Slot<Subscription>,
}

/// Returns the scenario runtime, creating it on first use.
pub(crate) fn runtime_for(state: &ChatRoomState) -> SharedRuntime {
    ensure_runtime(&state.runtime)
}

/// Runs one command and feeds its message back into the view.
///
/// A follow-up command that waits on the subscription is kept as the pump.
pub(crate) fn run_command(state: &ChatRoomState, cmd: Option<Cmd>) {
    let runtime = runtime_for(state);
    let Some(command) = cmd else {
        return;
    };
    let next = runtime
        .block_on(command)
        .and_then(|msg| with_app(state, |app| app.update(msg)));
    if let Some(pump) = next {
        state.pump.set(pump);
    }
}

/// Waits for the next payload on the public subscription and applies it.
pub(crate) fn run_pump(state: &ChatRoomState) {
    let runtime = runtime_for(state);
    let pump = state
        .pump
        .take()
        .unwrap_or_else(|| panic!("no subscription pump is armed"));
    let msg = runtime
        .block_on_within(PUMP_TIMEOUT, pump)
        .unwrap_or_else(|| panic!("no payload arrived on the public topic"));
    if let Some(next) = msg.and_then(|payload| with_app(state, |app| app.update(payload))) {
        state.pump.set(next);
    }
}

fn with_app<R>(state: &ChatRoomState, f: impl FnOnce(&mut ChatApp) -> R) -> R {
    state
        .app
        .with_mut(f)
        .unwrap_or_else(|| panic!("chat view not started"))
}
