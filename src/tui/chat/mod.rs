//! Interactive chat room view.
//!
//! The view opens on a registration form unless a display name was supplied
//! at start-up. Registering runs the session handshake as a command; once
//! connected, a pump command waits on the public subscription and re-arms
//! itself after every payload.

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;
use tokio::sync::Mutex;

use crate::chat::{ChatSession, ChatState, MessagingTransport, Subscription};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::storage::ChatContext;

mod handlers;
mod input;
mod messages;
mod model_impl;
mod rendering;

pub use input::{ChatInputContext, map_chat_key};
pub use messages::ChatMsg;

/// Main chat view model.
pub struct ChatApp {
    state: ChatState,
    transport: Option<Arc<dyn MessagingTransport>>,
    endpoint: String,
    local_only: bool,
    telemetry: Arc<dyn TelemetrySink>,
    session: Option<ChatSession>,
    subscription: Option<Arc<Mutex<Subscription>>>,
    name_input: String,
    connecting: bool,
    status: Option<String>,
    width: u16,
    height: u16,
}

impl fmt::Debug for ChatApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatApp")
            .field("state", &self.state)
            .field("endpoint", &self.endpoint)
            .field("local_only", &self.local_only)
            .field("session", &self.session)
            .field("name_input", &self.name_input)
            .field("connecting", &self.connecting)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl ChatApp {
    /// Creates a disconnected view for `endpoint`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        let (width, height) = super::storage::get_initial_terminal_size();
        Self {
            state: ChatState::new(String::new()),
            transport: None,
            endpoint: endpoint.into(),
            local_only: false,
            telemetry: Arc::new(NoopTelemetrySink),
            session: None,
            subscription: None,
            name_input: String::new(),
            connecting: false,
            status: None,
            width,
            height,
        }
    }

    /// Builds the view from start-up context.
    #[must_use]
    pub fn from_context(context: &ChatContext) -> Self {
        let mut app =
            Self::new(context.endpoint.clone()).with_transport(Arc::clone(&context.transport));
        if let Some(name) = context.display_name.as_deref() {
            name.clone_into(&mut app.name_input);
        }
        app.local_only = context.local_only;
        app
    }

    /// Attaches the messaging transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn MessagingTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replaces the telemetry sink handed to new sessions.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the current conversation snapshot.
    #[must_use]
    pub const fn state(&self) -> &ChatState {
        &self.state
    }

    /// Returns the display name typed so far.
    #[must_use]
    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Returns true while the handshake is running.
    #[must_use]
    pub const fn is_connecting(&self) -> bool {
        self.connecting
    }

    /// Returns the last status or error line.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Returns the input context for key mapping.
    #[must_use]
    pub const fn input_context(&self) -> ChatInputContext {
        if self.state.is_connected() {
            ChatInputContext::Chatting
        } else {
            ChatInputContext::Registering
        }
    }

    /// Handles a message and returns an optional command.
    pub fn handle_message(&mut self, msg: ChatMsg) -> Option<Cmd> {
        match msg {
            ChatMsg::NameChar(character) => {
                self.name_input.push(character);
                None
            }
            ChatMsg::NameBackspace => {
                self.name_input.pop();
                None
            }
            ChatMsg::Register => self.handle_register(),
            ChatMsg::Connected {
                session,
                subscription,
            } => self.handle_connected(session, subscription),
            ChatMsg::ConnectFailed(error) => self.handle_connect_failed(&error),
            ChatMsg::Inbound(payload) => self.handle_inbound(&payload),
            ChatMsg::SubscriptionClosed => self.handle_subscription_closed(),
            ChatMsg::DraftChar(character) => {
                self.state = self.state.push_draft_char(character);
                None
            }
            ChatMsg::DraftBackspace => {
                self.state = self.state.pop_draft_char();
                None
            }
            ChatMsg::Send => self.handle_send(),
            ChatMsg::SendFailed(error) => {
                tracing::warn!(%error, "chat message was not delivered");
                self.status = Some(format!("Message not sent: {error}"));
                None
            }
            ChatMsg::NextTab => {
                self.state = self.state.cycle_tab();
                None
            }
            ChatMsg::Quit => Some(self.handle_quit()),
            ChatMsg::WindowResized { width, height } => {
                self.width = width;
                self.height = height;
                None
            }
        }
    }
}
