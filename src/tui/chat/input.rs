//! Key-to-message mapping for the chat view.

use bubbletea_rs::event::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::ChatMsg;

/// Which screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatInputContext {
    /// Registration form.
    Registering,
    /// Connected chat room.
    Chatting,
}

/// Maps a key event to a chat message for the given screen.
///
/// `Esc` and `Ctrl+C` quit from either screen.
#[must_use]
pub fn map_chat_key(key: &KeyMsg, context: ChatInputContext) -> Option<ChatMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.key == KeyCode::Char('c')).then_some(ChatMsg::Quit);
    }

    match (context, key.key) {
        (_, KeyCode::Esc) => Some(ChatMsg::Quit),
        (ChatInputContext::Registering, KeyCode::Enter) => Some(ChatMsg::Register),
        (ChatInputContext::Registering, KeyCode::Backspace) => Some(ChatMsg::NameBackspace),
        (ChatInputContext::Registering, KeyCode::Char(character)) => {
            Some(ChatMsg::NameChar(character))
        }
        (ChatInputContext::Chatting, KeyCode::Enter) => Some(ChatMsg::Send),
        (ChatInputContext::Chatting, KeyCode::Backspace) => Some(ChatMsg::DraftBackspace),
        (ChatInputContext::Chatting, KeyCode::Tab) => Some(ChatMsg::NextTab),
        (ChatInputContext::Chatting, KeyCode::Char(character)) => {
            Some(ChatMsg::DraftChar(character))
        }
        _ => None,
    }
}
