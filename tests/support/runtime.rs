//! Tokio runtime shared by the steps of one behavioural scenario.
//!
//! Step functions are synchronous, so every async call into the client is
//! driven through the scenario's [`SharedRuntime`].

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;

/// Runtime handle that can live in an `rstest-bdd` [`Slot`].
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    /// Drives `future` to completion.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }

    /// Drives `future` for at most `limit`, returning `None` when it did not
    /// finish in time.
    pub fn block_on_within<F: Future>(&self, limit: Duration, future: F) -> Option<F::Output> {
        self.block_on(async { tokio::time::timeout(limit, future).await.ok() })
    }
}

/// Returns the scenario runtime, creating it on first use.
///
/// # Panics
///
/// Panics when Tokio cannot build a runtime.
pub fn ensure_runtime(slot: &Slot<SharedRuntime>) -> SharedRuntime {
    if let Some(runtime) = slot.get() {
        return runtime;
    }
    let runtime = SharedRuntime::new(
        Runtime::new().unwrap_or_else(|error| panic!("failed to create Tokio runtime: {error}")),
    );
    slot.set(runtime.clone());
    runtime
}
