//! Application telemetry events and sinks.
//!
//! Gavel records a handful of operational signals (page load latency, chat
//! handshake results) to help with local debugging. Nothing is transmitted.

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by Gavel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A page of auctions finished loading.
    SearchPageLoaded {
        /// 1-based page that was loaded.
        page: u32,
        /// Number of auctions on the page.
        item_count: usize,
        /// Time spent in the gateway, in milliseconds.
        latency_ms: u64,
    },
    /// The chat handshake succeeded.
    ChatConnected {
        /// Messaging endpoint.
        endpoint: String,
    },
    /// The chat handshake failed.
    ChatHandshakeFailed {
        /// Messaging endpoint.
        endpoint: String,
        /// Error detail.
        message: String,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Forwards events to the `tracing` subscriber as JSON on the
/// `gavel::telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };
        tracing::info!(target: "gavel::telemetry", event = %serialised);
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    //! Telemetry sinks for assertions in tests.

    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every recorded event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}
