//! Session and conversation handlers for the chat view.

use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::sync::Mutex;

use crate::chat::{ChatSession, Subscription};

use super::ChatApp;
use super::messages::ChatMsg;

fn boxed(msg: ChatMsg) -> Box<dyn Any + Send> {
    Box::new(msg)
}

/// Waits for the next payload on the shared subscription.
fn pump(subscription: Arc<Mutex<Subscription>>) -> Cmd {
    Box::pin(async move {
        let next = subscription.lock().await.next().await;
        Some(boxed(next.map_or(ChatMsg::SubscriptionClosed, ChatMsg::Inbound)))
    })
}

impl ChatApp {
    /// Starts the handshake for a configured display name.
    pub(super) fn auto_register(&mut self) -> Option<Cmd> {
        if self.name_input.trim().is_empty() {
            return None;
        }
        self.handle_register()
    }

    pub(super) fn handle_register(&mut self) -> Option<Cmd> {
        if self.connecting || self.state.is_connected() {
            return None;
        }
        let name = self.name_input.trim().to_owned();
        if name.is_empty() {
            self.status = Some("Enter a display name to join.".to_owned());
            return None;
        }
        let Some(transport) = self.transport.clone() else {
            self.status = Some("No chat transport configured.".to_owned());
            return None;
        };

        self.state = self.state.with_display_name(name.as_str());
        self.connecting = true;
        self.status = None;
        let mut session = ChatSession::new(transport, self.endpoint.as_str(), name)
            .with_telemetry(Arc::clone(&self.telemetry));

        Some(Box::pin(async move {
            let msg = match session.connect().await {
                Ok(subscription) => ChatMsg::Connected {
                    session,
                    subscription,
                },
                Err(error) => ChatMsg::ConnectFailed(error.to_string()),
            };
            Some(boxed(msg))
        }))
    }

    pub(super) fn handle_connected(
        &mut self,
        session: ChatSession,
        subscription: Subscription,
    ) -> Option<Cmd> {
        self.connecting = false;
        self.state = self.state.connected();
        self.session = Some(session);
        let shared = Arc::new(Mutex::new(subscription));
        self.subscription = Some(Arc::clone(&shared));
        Some(pump(shared))
    }

    /// The session already logged the failure; the view stays on the
    /// registration form and nothing is retried.
    pub(super) fn handle_connect_failed(&mut self, error: &str) -> Option<Cmd> {
        self.connecting = false;
        self.state = self.state.disconnected();
        self.status = Some(format!("Could not connect: {error}"));
        None
    }

    pub(super) fn handle_inbound(&mut self, payload: &str) -> Option<Cmd> {
        match self.state.apply_public(payload) {
            Ok(next) => self.state = next,
            Err(error) => tracing::warn!(%error, "ignoring undecodable chat payload"),
        }
        self.subscription.as_ref().map(|shared| pump(Arc::clone(shared)))
    }

    /// Ends the session so the transport is closed as well.
    pub(super) fn handle_subscription_closed(&mut self) -> Option<Cmd> {
        tracing::info!(endpoint = %self.endpoint, "chat subscription closed");
        let disconnect = self.end_session();
        self.state = self.state.disconnected();
        self.status = Some("Disconnected from chat.".to_owned());
        Some(Box::pin(async move {
            disconnect.await;
            None
        }))
    }

    /// Takes the draft and publishes it.
    ///
    /// Public messages appear when the broadcast echo arrives; private ones
    /// are already in the peer history when this returns.
    pub(super) fn handle_send(&mut self) -> Option<Cmd> {
        let session = self.session.clone()?;
        match self.state.take_message() {
            Ok((next, Some(message))) => {
                self.state = next;
                self.status = None;
                Some(Box::pin(async move {
                    let result = if message.receiver_name.is_some() {
                        session.send_private(&message).await
                    } else {
                        session.send_public(&message).await
                    };
                    result
                        .err()
                        .map(|error| boxed(ChatMsg::SendFailed(error.to_string())))
                }))
            }
            Ok((next, None)) => {
                self.state = next;
                None
            }
            Err(error) => {
                self.status = Some(error.to_string());
                None
            }
        }
    }

    /// Disconnects the session, then quits.
    pub(super) fn handle_quit(&mut self) -> Cmd {
        let disconnect = self.end_session();
        Box::pin(async move {
            disconnect.await;
            bubbletea_rs::quit().await
        })
    }

    /// Detaches the session and subscription, returning the disconnect to
    /// run.
    fn end_session(&mut self) -> impl Future<Output = ()> + Send + 'static {
        let session = self.session.take();
        self.subscription = None;
        async move {
            if let Some(mut active) = session
                && let Err(error) = active.disconnect().await
            {
                tracing::warn!(%error, "chat disconnect failed");
            }
        }
    }
}
