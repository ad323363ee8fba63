//! In-process broker that mimics the chat server's routing.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use crate::chat::message::ChatMessage;
use crate::chat::session::{APP_MESSAGE, APP_PRIVATE_MESSAGE, PUBLIC_TOPIC, private_topic};
use crate::error::ClientError;

use super::{MessagingTransport, Subscription};

#[derive(Debug)]
struct Subscriber {
    client_id: u64,
    sender: mpsc::UnboundedSender<String>,
}

#[derive(Debug, Default)]
struct Routes {
    subscribers: HashMap<String, Vec<Subscriber>>,
}

impl Routes {
    fn publish(&mut self, destination: &str, payload: &str) -> usize {
        let Some(subscribers) = self.subscribers.get_mut(destination) else {
            return 0;
        };
        subscribers.retain(|subscriber| subscriber.sender.send(payload.to_owned()).is_ok());
        subscribers.len()
    }

    fn drop_client(&mut self, client_id: u64) {
        for subscribers in self.subscribers.values_mut() {
            subscribers.retain(|subscriber| subscriber.client_id != client_id);
        }
    }
}

/// Shared routing hub.
///
/// Messages published to `/app/message` are broadcast on
/// `/chatroom/public`; messages published to `/app/private-message` go to
/// `/user/{receiverName}/private`. Any other destination is delivered as-is.
#[derive(Debug, Clone, Default)]
pub struct LoopbackBroker {
    routes: Arc<Mutex<Routes>>,
    next_client: Arc<AtomicU64>,
}

impl LoopbackBroker {
    /// Creates an empty broker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport attached to this broker.
    #[must_use]
    pub fn client(&self) -> LoopbackTransport {
        LoopbackTransport {
            broker: self.clone(),
            client_id: self.next_client.fetch_add(1, Ordering::Relaxed),
            connected: AtomicBool::new(false),
            refusal: None,
        }
    }

    /// Creates a transport whose handshake always fails with `reason`.
    #[must_use]
    pub fn refusing_client(&self, reason: impl Into<String>) -> LoopbackTransport {
        LoopbackTransport {
            refusal: Some(reason.into()),
            ..self.client()
        }
    }

    async fn route(&self, destination: &str, payload: &str) -> Result<usize, ClientError> {
        let target = match destination {
            APP_MESSAGE => PUBLIC_TOPIC.to_owned(),
            APP_PRIVATE_MESSAGE => {
                let message = ChatMessage::from_json(payload)?;
                let receiver = message.receiver_name.ok_or_else(|| ClientError::Messaging {
                    message: "private message has no receiverName".to_owned(),
                })?;
                private_topic(&receiver)
            }
            other => other.to_owned(),
        };
        let delivered = self.routes.lock().await.publish(&target, payload);
        tracing::trace!(destination, %target, delivered, "loopback delivery");
        Ok(delivered)
    }
}

/// One client connection to a [`LoopbackBroker`].
#[derive(Debug)]
pub struct LoopbackTransport {
    broker: LoopbackBroker,
    client_id: u64,
    connected: AtomicBool,
    refusal: Option<String>,
}

impl LoopbackTransport {
    fn ensure_connected(&self) -> Result<(), ClientError> {
        if self.connected.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(ClientError::NotConnected)
        }
    }
}

#[async_trait]
impl MessagingTransport for LoopbackTransport {
    async fn connect(&self, endpoint: &str) -> Result<(), ClientError> {
        if let Some(reason) = &self.refusal {
            return Err(ClientError::Messaging {
                message: format!("handshake with {endpoint} failed: {reason}"),
            });
        }
        self.connected.store(true, Ordering::Release);
        Ok(())
    }

    async fn subscribe(&self, destination: &str) -> Result<Subscription, ClientError> {
        self.ensure_connected()?;
        let (sender, subscription) = Subscription::channel(destination);
        self.broker
            .routes
            .lock()
            .await
            .subscribers
            .entry(destination.to_owned())
            .or_default()
            .push(Subscriber {
                client_id: self.client_id,
                sender,
            });
        Ok(subscription)
    }

    async fn send(&self, destination: &str, payload: String) -> Result<(), ClientError> {
        self.ensure_connected()?;
        self.broker.route(destination, &payload).await.map(|_| ())
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        self.connected.store(false, Ordering::Release);
        self.broker.routes.lock().await.drop_client(self.client_id);
        Ok(())
    }
}
