//! Message handlers for the search view.

use std::any::Any;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::auctions::{AuctionIntake, AuctionPage, FetchOutcome, FetchTicket};
use crate::error::ClientError;

use super::messages::SearchMsg;
use super::{CHROME_ROWS, SearchApp};

impl SearchApp {
    pub(super) fn handle_navigation_msg(&mut self, msg: &SearchMsg) -> Option<Cmd> {
        let count = self.state.auctions().len();
        match msg {
            SearchMsg::CursorUp => self.set_cursor(self.cursor_position.saturating_sub(1)),
            SearchMsg::CursorDown => {
                let last = count.saturating_sub(1);
                self.set_cursor(self.cursor_position.saturating_add(1).min(last));
            }
            SearchMsg::CursorHome => {
                self.scroll_offset = 0;
                self.set_cursor(0);
            }
            SearchMsg::CursorEnd => self.set_cursor(count.saturating_sub(1)),
            _ => debug_assert!(false, "non-navigation message routed to handle_navigation_msg"),
        }
        None
    }

    pub(super) fn handle_criteria_msg(&mut self, msg: &SearchMsg) -> Option<Cmd> {
        match msg {
            SearchMsg::NextPage => self.fetch_if(|app| app.state.next_page()),
            SearchMsg::PreviousPage => self.fetch_if(|app| app.state.previous_page()),
            SearchMsg::CycleCategory => self.fetch_if(|app| app.state.cycle_category()),
            SearchMsg::SubmitSearch => {
                self.editing = false;
                self.fetch_if(|app| app.state.submit_search())
            }
            SearchMsg::StartEditing => {
                self.editing = true;
                None
            }
            SearchMsg::CancelEditing => {
                self.editing = false;
                None
            }
            SearchMsg::InputChar(character) => {
                self.state.push_search_char(*character);
                None
            }
            SearchMsg::Backspace => {
                self.state.pop_search_char();
                None
            }
            _ => {
                debug_assert!(false, "non-criteria message routed to handle_criteria_msg");
                None
            }
        }
    }

    pub(super) fn handle_data_msg(&mut self, msg: &SearchMsg) -> Option<Cmd> {
        match msg {
            SearchMsg::Initialized | SearchMsg::Reload => self.issue_fetch(),
            SearchMsg::FetchCompleted { ticket, result } => {
                self.handle_fetch_completed(ticket, result.clone())
            }
            _ => {
                debug_assert!(false, "non-data message routed to handle_data_msg");
                None
            }
        }
    }

    pub(super) fn handle_lifecycle_msg(&mut self, msg: &SearchMsg) -> Option<Cmd> {
        match msg {
            SearchMsg::Quit => Some(bubbletea_rs::quit()),
            SearchMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            SearchMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => None,
        }
    }

    fn fetch_if(&mut self, change: impl FnOnce(&mut Self) -> bool) -> Option<Cmd> {
        if change(self) { self.issue_fetch() } else { None }
    }

    /// Starts a fetch for the current page and criteria.
    ///
    /// Every call supersedes the previous one; a late response for an older
    /// ticket is dropped by the state.
    fn issue_fetch(&mut self) -> Option<Cmd> {
        let ticket = self.state.begin_fetch().ok()?;
        let Some(gateway) = self.gateway.clone() else {
            self.state.apply(
                &ticket,
                Err(ClientError::Configuration {
                    message: "no auction gateway configured".to_owned(),
                }),
            );
            return None;
        };
        let telemetry = Arc::clone(&self.telemetry);

        Some(Box::pin(async move {
            let result = AuctionIntake::new(gateway.as_ref())
                .with_telemetry(telemetry.as_ref())
                .fetch(&ticket)
                .await;
            Some(Box::new(SearchMsg::FetchCompleted { ticket, result }) as Box<dyn Any + Send>)
        }))
    }

    fn handle_fetch_completed(
        &mut self,
        ticket: &FetchTicket,
        result: Result<AuctionPage, ClientError>,
    ) -> Option<Cmd> {
        match self.state.apply(ticket, result) {
            FetchOutcome::Applied => {
                if self.state.take_scroll_to_top() {
                    self.scroll_offset = 0;
                    self.cursor_position = 0;
                }
                self.clamp_cursor();
                None
            }
            FetchOutcome::Reclamped => self.issue_fetch(),
            FetchOutcome::Stale => None,
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.auction_list
            .set_visible_height(usize::from(height.saturating_sub(CHROME_ROWS).max(1)));
        self.ensure_cursor_visible();
    }

    fn set_cursor(&mut self, position: usize) {
        self.cursor_position = position;
        self.ensure_cursor_visible();
    }

    fn clamp_cursor(&mut self) {
        let last = self.state.auctions().len().saturating_sub(1);
        self.set_cursor(self.cursor_position.min(last));
    }

    /// Keeps the cursor inside the scroll window.
    const fn ensure_cursor_visible(&mut self) {
        let visible_height = self.auction_list.visible_height();

        if self.cursor_position < self.scroll_offset {
            self.scroll_offset = self.cursor_position;
            return;
        }

        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.cursor_position >= viewport_end {
            self.scroll_offset = self
                .cursor_position
                .saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
