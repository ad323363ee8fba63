//! Messaging transport seam.
//!
//! The chat session talks to the publish/subscribe endpoint only through
//! [`MessagingTransport`]. Framing and the wire protocol live behind the
//! trait; the crate ships an in-process [`LoopbackBroker`] for local runs and
//! tests.

mod loopback;

pub use loopback::{LoopbackBroker, LoopbackTransport};

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::ClientError;

/// Publish/subscribe client used by the chat session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagingTransport: Send + Sync {
    /// Opens the connection and performs the protocol handshake.
    async fn connect(&self, endpoint: &str) -> Result<(), ClientError>;

    /// Subscribes to a destination.
    async fn subscribe(&self, destination: &str) -> Result<Subscription, ClientError>;

    /// Publishes a JSON payload to a destination.
    async fn send(&self, destination: &str, payload: String) -> Result<(), ClientError>;

    /// Closes the connection, ending every subscription.
    async fn disconnect(&self) -> Result<(), ClientError>;
}

/// Stream of raw payloads delivered to one destination.
#[derive(Debug)]
pub struct Subscription {
    destination: String,
    receiver: mpsc::UnboundedReceiver<String>,
}

impl Subscription {
    /// Wraps a receiver for `destination`.
    #[must_use]
    pub fn new(destination: impl Into<String>, receiver: mpsc::UnboundedReceiver<String>) -> Self {
        Self {
            destination: destination.into(),
            receiver,
        }
    }

    /// Creates a subscription together with the sender that feeds it.
    #[must_use]
    pub fn channel(destination: impl Into<String>) -> (mpsc::UnboundedSender<String>, Self) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (sender, Self::new(destination, receiver))
    }

    /// Returns the subscribed destination.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Waits for the next payload. Returns `None` once the transport closes
    /// the subscription.
    pub async fn next(&mut self) -> Option<String> {
        self.receiver.recv().await
    }

    /// Returns a payload if one is already queued.
    pub fn try_next(&mut self) -> Option<String> {
        self.receiver.try_recv().ok()
    }
}
