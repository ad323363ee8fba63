//! Chat wire payloads and the events decoded from them.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Kind of chat payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    /// Presence announcement.
    Join,
    /// Text message.
    Message,
}

/// JSON payload exchanged with the messaging endpoint.
///
/// Serialises as `{senderName, receiverName?, message?, status}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Display name of the sender.
    pub sender_name: String,
    /// Recipient for private messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_name: Option<String>,
    /// Message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload kind.
    pub status: MessageStatus,
}

impl ChatMessage {
    /// Builds the JOIN announcement for `sender`.
    #[must_use]
    pub fn join(sender: &str) -> Self {
        Self {
            sender_name: sender.to_owned(),
            receiver_name: None,
            message: None,
            status: MessageStatus::Join,
        }
    }

    /// Builds a public text message.
    #[must_use]
    pub fn public(sender: &str, text: &str) -> Self {
        Self {
            sender_name: sender.to_owned(),
            receiver_name: None,
            message: Some(text.to_owned()),
            status: MessageStatus::Message,
        }
    }

    /// Builds a private text message addressed to `receiver`.
    #[must_use]
    pub fn private(sender: &str, receiver: &str, text: &str) -> Self {
        Self {
            sender_name: sender.to_owned(),
            receiver_name: Some(receiver.to_owned()),
            message: Some(text.to_owned()),
            status: MessageStatus::Message,
        }
    }

    /// Returns the message text, or an empty string for presence payloads.
    #[must_use]
    pub fn text(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// Encodes the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, ClientError> {
        serde_json::to_string(self).map_err(|error| ClientError::decode(&error))
    }

    /// Decodes a JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the payload is malformed or
    /// carries an unknown status.
    pub fn from_json(payload: &str) -> Result<Self, ClientError> {
        serde_json::from_str(payload).map_err(|error| ClientError::decode(&error))
    }
}

/// Inbound event dispatched by the chat state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    /// A participant announced themselves.
    Join {
        /// Display name of the participant.
        peer: String,
    },
    /// A text message arrived.
    Message(ChatMessage),
}

impl ChatEvent {
    /// Decodes a JSON payload into an event.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the payload is malformed.
    pub fn decode(payload: &str) -> Result<Self, ClientError> {
        ChatMessage::from_json(payload).map(Self::from)
    }
}

impl From<ChatMessage> for ChatEvent {
    fn from(message: ChatMessage) -> Self {
        match message.status {
            MessageStatus::Join => Self::Join {
                peer: message.sender_name,
            },
            MessageStatus::Message => Self::Message(message),
        }
    }
}
