//! Chat room: wire payloads, conversation state, the owned session, and the
//! transport seam.
//!
//! The view starts disconnected. [`ChatSession::connect`] performs the
//! handshake, subscribes to the public topic and announces the participant;
//! inbound payloads are folded into [`ChatState`] snapshots.

pub mod message;
pub mod session;
pub mod state;
pub mod transport;

pub use message::{ChatEvent, ChatMessage, MessageStatus};
pub use session::{
    APP_MESSAGE, APP_PRIVATE_MESSAGE, ChatSession, DEFAULT_CHAT_ENDPOINT, PUBLIC_TOPIC,
    private_topic,
};
pub use state::{ChatState, ChatTab, ConnectionState};
#[cfg(test)]
pub use transport::MockMessagingTransport;
pub use transport::{LoopbackBroker, LoopbackTransport, MessagingTransport, Subscription};
