//! Local conversation state for the chat room.
//!
//! `ChatState` is an immutable snapshot. Every update returns a new snapshot
//! and leaves the receiver untouched; histories are shared between snapshots
//! through `Arc` and copied only when a snapshot diverges.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ClientError;

use super::message::{ChatEvent, ChatMessage};

type History = Arc<Vec<ChatMessage>>;

/// Conversation currently shown.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChatTab {
    /// The shared chat room.
    #[default]
    Public,
    /// A private conversation with the named peer.
    Peer(String),
}

/// Connection lifecycle of the chat view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Registration form shown; nothing can be sent.
    #[default]
    Disconnected,
    /// Handshake succeeded; sending and receiving are enabled.
    Connected,
}

/// Snapshot of the chat view's local state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatState {
    display_name: String,
    connection: ConnectionState,
    public: History,
    private: Arc<BTreeMap<String, History>>,
    tab: ChatTab,
    draft: String,
}

impl ChatState {
    /// Creates a disconnected state for `display_name`.
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Returns a snapshot with a different display name.
    #[must_use]
    pub fn with_display_name(&self, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..self.clone()
        }
    }

    /// Returns a snapshot in the connected state.
    #[must_use]
    pub fn connected(&self) -> Self {
        Self {
            connection: ConnectionState::Connected,
            ..self.clone()
        }
    }

    /// Returns a snapshot in the disconnected state. Histories are kept.
    #[must_use]
    pub fn disconnected(&self) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            ..self.clone()
        }
    }

    /// Applies a payload received on the public topic.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the payload is malformed.
    pub fn apply_public(&self, payload: &str) -> Result<Self, ClientError> {
        ChatEvent::decode(payload).map(|event| self.apply_event(event))
    }

    /// Applies a decoded public event.
    ///
    /// JOIN registers the peer (idempotent); MESSAGE appends to the public
    /// history.
    #[must_use]
    pub fn apply_event(&self, event: ChatEvent) -> Self {
        match event {
            ChatEvent::Join { peer } => self.ensure_peer(&peer),
            ChatEvent::Message(message) => {
                let mut next = self.clone();
                Arc::make_mut(&mut next.public).push(message);
                next
            }
        }
    }

    /// Applies a payload received on the private topic.
    ///
    /// The message is appended to the sender's history, which is created
    /// first if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the payload is malformed.
    pub fn apply_private(&self, payload: &str) -> Result<Self, ClientError> {
        let message = ChatMessage::from_json(payload)?;
        let peer = message.sender_name.clone();
        Ok(self.append_private(&peer, message))
    }

    /// Ensures a private history exists for `peer`.
    ///
    /// Shared by JOIN handling, private delivery, and tab selection so peers
    /// are created the same way on every path.
    #[must_use]
    pub fn ensure_peer(&self, peer: &str) -> Self {
        if self.private.contains_key(peer) {
            return self.clone();
        }
        let mut next = self.clone();
        Arc::make_mut(&mut next.private).insert(peer.to_owned(), History::default());
        next
    }

    fn append_private(&self, peer: &str, message: ChatMessage) -> Self {
        let mut next = self.ensure_peer(peer);
        if let Some(history) = Arc::make_mut(&mut next.private).get_mut(peer) {
            Arc::make_mut(history).push(message);
        }
        next
    }

    /// Switches the rendered conversation.
    ///
    /// Selecting a peer without a history initialises an empty one.
    #[must_use]
    pub fn select_tab(&self, tab: ChatTab) -> Self {
        let mut next = match &tab {
            ChatTab::Public => self.clone(),
            ChatTab::Peer(peer) => self.ensure_peer(peer),
        };
        next.tab = tab;
        next
    }

    /// Selects the tab after the current one, wrapping back to the public
    /// room after the last peer.
    #[must_use]
    pub fn cycle_tab(&self) -> Self {
        let next_peer = match &self.tab {
            ChatTab::Public => self.private.keys().next(),
            ChatTab::Peer(current) => self
                .private
                .keys()
                .skip_while(|peer| *peer != current)
                .nth(1),
        };
        let tab = next_peer.map_or(ChatTab::Public, |peer| ChatTab::Peer(peer.clone()));
        self.select_tab(tab)
    }

    /// Returns a snapshot with the draft replaced.
    #[must_use]
    pub fn with_draft(&self, draft: impl Into<String>) -> Self {
        Self {
            draft: draft.into(),
            ..self.clone()
        }
    }

    /// Returns a snapshot with `character` appended to the draft.
    #[must_use]
    pub fn push_draft_char(&self, character: char) -> Self {
        let mut next = self.clone();
        next.draft.push(character);
        next
    }

    /// Returns a snapshot with the last draft character removed.
    #[must_use]
    pub fn pop_draft_char(&self) -> Self {
        let mut next = self.clone();
        next.draft.pop();
        next
    }

    /// Builds a public MESSAGE from the draft and clears it.
    ///
    /// The public history is not touched; it updates when the broadcast
    /// echo arrives. An empty draft yields no message.
    #[must_use]
    pub fn take_public_message(&self) -> (Self, Option<ChatMessage>) {
        if self.draft.is_empty() {
            return (self.clone(), None);
        }
        let message = ChatMessage::public(&self.display_name, &self.draft);
        (self.with_draft(String::new()), Some(message))
    }

    /// Builds a private MESSAGE for the selected peer and clears the draft.
    ///
    /// The message is appended to the peer's history straight away unless
    /// the peer is the sender. An empty draft yields no message.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Chat`] when the public room is selected.
    pub fn take_private_message(&self) -> Result<(Self, Option<ChatMessage>), ClientError> {
        let ChatTab::Peer(peer) = &self.tab else {
            return Err(ClientError::Chat {
                message: "select a member before sending a private message".to_owned(),
            });
        };
        if self.draft.is_empty() {
            return Ok((self.clone(), None));
        }

        let message = ChatMessage::private(&self.display_name, peer, &self.draft);
        let next = if *peer == self.display_name {
            self.clone()
        } else {
            self.append_private(peer, message.clone())
        };
        Ok((next.with_draft(String::new()), Some(message)))
    }

    /// Builds the outgoing message for whichever tab is selected.
    ///
    /// # Errors
    ///
    /// Propagates [`ChatState::take_private_message`] failures.
    pub fn take_message(&self) -> Result<(Self, Option<ChatMessage>), ClientError> {
        match &self.tab {
            ChatTab::Public => Ok(self.take_public_message()),
            ChatTab::Peer(_) => self.take_private_message(),
        }
    }

    /// Returns the local display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the connection state.
    #[must_use]
    pub const fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Returns true once the handshake has succeeded.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        matches!(self.connection, ConnectionState::Connected)
    }

    /// Returns the public history.
    #[must_use]
    pub fn public_history(&self) -> &[ChatMessage] {
        &self.public
    }

    /// Returns the private history for `peer`, if one exists.
    #[must_use]
    pub fn private_history(&self, peer: &str) -> Option<&[ChatMessage]> {
        self.private.get(peer).map(|history| history.as_slice())
    }

    /// Returns known peers in name order.
    pub fn peers(&self) -> impl Iterator<Item = &str> {
        self.private.keys().map(String::as_str)
    }

    /// Returns the number of known peers.
    #[must_use]
    pub fn peer_count(&self) -> usize {
        self.private.len()
    }

    /// Returns the selected tab.
    #[must_use]
    pub const fn tab(&self) -> &ChatTab {
        &self.tab
    }

    /// Returns the draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Returns the history of the selected tab.
    #[must_use]
    pub fn active_history(&self) -> &[ChatMessage] {
        match &self.tab {
            ChatTab::Public => self.public_history(),
            ChatTab::Peer(peer) => self.private_history(peer).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
