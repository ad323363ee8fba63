//! Explicitly owned chat session.

use std::sync::Arc;

use crate::error::ClientError;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::message::ChatMessage;
use super::transport::{MessagingTransport, Subscription};

/// Topic every participant receives broadcasts on.
pub const PUBLIC_TOPIC: &str = "/chatroom/public";
/// Destination for public messages and presence announcements.
pub const APP_MESSAGE: &str = "/app/message";
/// Destination for private messages.
pub const APP_PRIVATE_MESSAGE: &str = "/app/private-message";

/// Returns the private topic of `user`.
#[must_use]
pub fn private_topic(user: &str) -> String {
    format!("/user/{user}/private")
}

/// Default messaging endpoint.
pub const DEFAULT_CHAT_ENDPOINT: &str = "http://localhost:8080/ws";

/// A session with the chat endpoint for one display name.
///
/// Clones share the transport, so a clone can publish on behalf of the
/// session it was taken from.
#[derive(Clone)]
pub struct ChatSession {
    transport: Arc<dyn MessagingTransport>,
    endpoint: String,
    display_name: String,
    telemetry: Arc<dyn TelemetrySink>,
    connected: bool,
}

impl ChatSession {
    /// Creates a disconnected session.
    #[must_use]
    pub fn new(
        transport: Arc<dyn MessagingTransport>,
        endpoint: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            display_name: display_name.into(),
            telemetry: Arc::new(NoopTelemetrySink),
            connected: false,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Performs the handshake, subscribes to the public topic, and announces
    /// the local participant with a JOIN.
    ///
    /// The private topic is not subscribed.
    ///
    /// # Errors
    ///
    /// Returns the transport error. The failure is logged and the session
    /// stays disconnected; nothing is retried.
    pub async fn connect(&mut self) -> Result<Subscription, ClientError> {
        match self.handshake().await {
            Ok(subscription) => {
                self.connected = true;
                tracing::info!(
                    endpoint = %self.endpoint,
                    user = %self.display_name,
                    "chat connected"
                );
                self.telemetry.record(TelemetryEvent::ChatConnected {
                    endpoint: self.endpoint.clone(),
                });
                Ok(subscription)
            }
            Err(error) => {
                tracing::error!(endpoint = %self.endpoint, %error, "chat handshake failed");
                self.telemetry.record(TelemetryEvent::ChatHandshakeFailed {
                    endpoint: self.endpoint.clone(),
                    message: error.to_string(),
                });
                Err(error)
            }
        }
    }

    async fn handshake(&self) -> Result<Subscription, ClientError> {
        self.transport.connect(&self.endpoint).await?;
        let subscription = self.transport.subscribe(PUBLIC_TOPIC).await?;
        let join = ChatMessage::join(&self.display_name).to_json()?;
        self.transport.send(APP_MESSAGE, join).await?;
        Ok(subscription)
    }

    /// Closes the session.
    ///
    /// # Errors
    ///
    /// Returns the transport error.
    pub async fn disconnect(&mut self) -> Result<(), ClientError> {
        if !self.connected {
            return Ok(());
        }
        self.connected = false;
        self.transport.disconnect().await
    }

    /// Publishes a public message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConnected`] before a successful
    /// [`ChatSession::connect`], or the transport error.
    pub async fn send_public(&self, message: &ChatMessage) -> Result<(), ClientError> {
        self.publish(APP_MESSAGE, message).await
    }

    /// Publishes a private message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotConnected`] before a successful
    /// [`ChatSession::connect`], or the transport error.
    pub async fn send_private(&self, message: &ChatMessage) -> Result<(), ClientError> {
        self.publish(APP_PRIVATE_MESSAGE, message).await
    }

    async fn publish(&self, destination: &str, message: &ChatMessage) -> Result<(), ClientError> {
        if !self.connected {
            return Err(ClientError::NotConnected);
        }
        self.transport.send(destination, message.to_json()?).await
    }

    /// Returns true after a successful handshake.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Returns the local display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the messaging endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("endpoint", &self.endpoint)
            .field("display_name", &self.display_name)
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}
