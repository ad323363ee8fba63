//! Chat history and member list rendering.

use crate::chat::{ChatMessage, ChatTab};

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Context for rendering a conversation history.
#[derive(Debug, Clone)]
pub struct ChatLogViewContext<'a> {
    /// Messages of the selected conversation, oldest first.
    pub messages: &'a [ChatMessage],
    /// Local display name; its messages are marked as self.
    pub own_name: &'a str,
    /// Rows available for the history. Zero renders everything.
    pub visible_height: usize,
    /// Maximum row width in columns. Zero disables truncation.
    pub max_width: usize,
}

/// Renders the newest messages that fit in the available rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatLogComponent;

impl ChatLogComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the tail of the history, one message per row.
    #[must_use]
    pub fn view(&self, ctx: &ChatLogViewContext<'_>) -> String {
        if ctx.messages.is_empty() {
            return "  No messages yet.\n".to_owned();
        }

        let skip = if ctx.visible_height == 0 {
            0
        } else {
            ctx.messages.len().saturating_sub(ctx.visible_height)
        };

        let mut output = String::new();
        for message in ctx.messages.iter().skip(skip) {
            let line = format_message_line(message, ctx.own_name);
            if ctx.max_width == 0 {
                output.push_str(&line);
            } else {
                output.push_str(&truncate_to_display_width_with_ellipsis(&line, ctx.max_width));
            }
            output.push('\n');
        }
        output
    }
}

fn format_message_line(message: &ChatMessage, own_name: &str) -> String {
    let text = message.text();
    if message.sender_name == own_name {
        format!("  {} (you): {text}", message.sender_name)
    } else {
        format!("  {}: {text}", message.sender_name)
    }
}

/// Context for rendering the member list.
#[derive(Debug, Clone)]
pub struct MemberListViewContext<'a> {
    /// Local display name, shown as the public room entry.
    pub own_name: &'a str,
    /// Known peers in tab order.
    pub peers: &'a [&'a str],
    /// Selected tab.
    pub selected: &'a ChatTab,
}

/// Renders the room entry and known peers on one line, bracketing the
/// selected tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberListComponent;

impl MemberListComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the member line.
    #[must_use]
    pub fn view(&self, ctx: &MemberListViewContext<'_>) -> String {
        let room = format!("Chatroom ({})", ctx.own_name);
        let mut entries = vec![mark(&room, matches!(ctx.selected, ChatTab::Public))];
        entries.extend(ctx.peers.iter().map(|peer| {
            let selected = matches!(ctx.selected, ChatTab::Peer(name) if name == peer);
            mark(peer, selected)
        }));
        format!("Members: {}\n", entries.join(" "))
    }
}

fn mark(label: &str, selected: bool) -> String {
    if selected {
        format!("[{label}]")
    } else {
        format!(" {label} ")
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn history() -> Vec<ChatMessage> {
        vec![
            ChatMessage::public("bob", "first"),
            ChatMessage::public("alice", "second"),
            ChatMessage::public("bob", "third"),
        ]
    }

    #[rstest]
    fn marks_own_messages(history: Vec<ChatMessage>) {
        let ctx = ChatLogViewContext {
            messages: &history,
            own_name: "alice",
            visible_height: 0,
            max_width: 0,
        };

        assert_eq!(
            ChatLogComponent::new().view(&ctx),
            "  bob: first\n  alice (you): second\n  bob: third\n"
        );
    }

    #[rstest]
    fn shows_newest_messages_when_short_of_rows(history: Vec<ChatMessage>) {
        let ctx = ChatLogViewContext {
            messages: &history,
            own_name: "alice",
            visible_height: 2,
            max_width: 0,
        };

        assert_eq!(
            ChatLogComponent::new().view(&ctx),
            "  alice (you): second\n  bob: third\n"
        );
    }

    #[rstest]
    fn empty_history_has_placeholder() {
        let ctx = ChatLogViewContext {
            messages: &[],
            own_name: "alice",
            visible_height: 5,
            max_width: 0,
        };

        assert_eq!(ChatLogComponent::new().view(&ctx), "  No messages yet.\n");
    }

    #[rstest]
    #[case(ChatTab::Public, "Members: [Chatroom (alice)]  bob   carol \n")]
    #[case(ChatTab::Peer("bob".to_owned()), "Members:  Chatroom (alice)  [bob]  carol \n")]
    fn brackets_selected_tab(#[case] selected: ChatTab, #[case] expected: &str) {
        let peers = ["bob", "carol"];
        let ctx = MemberListViewContext {
            own_name: "alice",
            peers: &peers,
            selected: &selected,
        };

        assert_eq!(MemberListComponent::new().view(&ctx), expected);
    }
}
