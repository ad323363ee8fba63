//! Support modules for the chat room BDD tests.

#[path = "../support/runtime.rs"]
pub(crate) mod runtime;
pub(crate) mod state;

pub(crate) use state::{ChatRoomState, ENDPOINT, run_command, run_pump, runtime_for};
