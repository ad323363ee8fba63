//! Message types for the chat view update loop.

use crate::chat::{ChatSession, Subscription};

/// Messages for the chat room TUI.
///
/// Unlike the search view these are consumed by value: a finished
/// handshake hands its session and subscription over to the model.
#[derive(Debug)]
pub enum ChatMsg {
    // Registration
    /// Append a character to the display name field.
    NameChar(char),
    /// Delete the last character of the display name field.
    NameBackspace,
    /// Connect with the typed display name.
    Register,

    // Session lifecycle
    /// The handshake succeeded.
    Connected {
        /// Connected session.
        session: ChatSession,
        /// Public topic subscription.
        subscription: Subscription,
    },
    /// The handshake failed.
    ConnectFailed(String),
    /// A payload arrived on the public topic.
    Inbound(String),
    /// The transport closed the subscription.
    SubscriptionClosed,

    // Composing
    /// Append a character to the draft.
    DraftChar(char),
    /// Delete the last character of the draft.
    DraftBackspace,
    /// Send the draft to the selected conversation.
    Send,
    /// Publishing a message failed.
    SendFailed(String),
    /// Select the next conversation tab.
    NextTab,

    // Application lifecycle
    /// Disconnect and quit.
    Quit,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}
