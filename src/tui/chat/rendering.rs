//! View rendering for the chat view.

use crate::chat::ChatTab;
use crate::tui::components::{
    ChatLogComponent, ChatLogViewContext, MemberListComponent, MemberListViewContext,
};

use super::ChatApp;

/// Rows used around the history on the connected screen.
const CHAT_CHROME_ROWS: u16 = 7;
const SEPARATOR: &str = "-";

impl ChatApp {
    pub(super) fn render_register_screen(&self) -> String {
        let mut output = String::from("Gavel - Chat Room\n\n");
        if self.local_only {
            output.push_str(&format!(
                "Room: local loopback ({} is not contacted)\n",
                self.endpoint
            ));
        } else {
            output.push_str(&format!("Room: {}\n", self.endpoint));
        }
        output.push_str(&format!("Display name: {}_\n\n", self.name_input));
        if self.connecting {
            output.push_str("Connecting...\n");
        } else if let Some(status) = &self.status {
            output.push_str(&format!("{status}\n"));
        }
        output.push_str("Enter:join  Esc:quit\n");
        output
    }

    pub(super) fn render_chat_screen(&self) -> String {
        let width = usize::from(self.width.max(1));
        let rule = SEPARATOR.repeat(width.saturating_sub(1));
        let peers: Vec<&str> = self.state.peers().collect();

        let mut output = format!("Gavel - Chat Room - {}\n", self.state.display_name());
        output.push_str(&MemberListComponent::new().view(&MemberListViewContext {
            own_name: self.state.display_name(),
            peers: &peers,
            selected: self.state.tab(),
        }));
        output.push_str(&self.render_conversation_title());
        output.push_str(&rule);
        output.push('\n');
        output.push_str(&ChatLogComponent::new().view(&ChatLogViewContext {
            messages: self.state.active_history(),
            own_name: self.state.display_name(),
            visible_height: usize::from(self.height.saturating_sub(CHAT_CHROME_ROWS).max(1)),
            max_width: width,
        }));
        output.push_str(&rule);
        output.push('\n');
        output.push_str(&format!("> {}_\n", self.state.draft()));
        output.push_str(&self.render_status_bar());
        output
    }

    fn render_conversation_title(&self) -> String {
        match self.state.tab() {
            ChatTab::Public => "Public room\n".to_owned(),
            ChatTab::Peer(peer) => format!("Private: {peer}\n"),
        }
    }

    fn render_status_bar(&self) -> String {
        self.status.as_ref().map_or_else(
            || "Tab:switch  Enter:send  Esc:quit\n".to_owned(),
            |status| format!("{status}\n"),
        )
    }
}
