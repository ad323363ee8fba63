//! Interactive auction search view.
//!
//! `SearchApp` wraps a [`SearchState`] and adds what only the terminal needs:
//! a list cursor, a scroll window, the search-field editing flag and the
//! help overlay. Page loads run as bubbletea-rs commands and come back as
//! [`SearchMsg::FetchCompleted`].

use std::fmt;
use std::sync::Arc;

use bubbletea_rs::Cmd;

use crate::auctions::{Auction, AuctionGateway, SearchState};
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

use super::components::AuctionListComponent;
use super::storage::SearchContext;

mod handlers;
mod input;
mod messages;
mod model_impl;
mod rendering;

pub use input::{InputContext, map_key_to_message};
pub use messages::SearchMsg;

/// Rows used by everything except the auction list.
const CHROME_ROWS: u16 = 8;

/// Main search view model.
pub struct SearchApp {
    state: SearchState,
    gateway: Option<Arc<dyn AuctionGateway>>,
    telemetry: Arc<dyn TelemetrySink>,
    cursor_position: usize,
    scroll_offset: usize,
    editing: bool,
    show_help: bool,
    width: u16,
    height: u16,
    auction_list: AuctionListComponent,
}

impl fmt::Debug for SearchApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchApp")
            .field("state", &self.state)
            .field("cursor_position", &self.cursor_position)
            .field("scroll_offset", &self.scroll_offset)
            .field("editing", &self.editing)
            .field("show_help", &self.show_help)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl SearchApp {
    /// Creates a view over `state` with no gateway attached.
    ///
    /// Without a gateway every fetch fails with a configuration error, which
    /// keeps rendering tests free of network access.
    #[must_use]
    pub fn new(state: SearchState) -> Self {
        let (width, height) = super::storage::get_initial_terminal_size();
        let mut auction_list = AuctionListComponent::new();
        auction_list.set_visible_height(usize::from(height.saturating_sub(CHROME_ROWS).max(1)));
        Self {
            state,
            gateway: None,
            telemetry: Arc::new(NoopTelemetrySink),
            cursor_position: 0,
            scroll_offset: 0,
            editing: false,
            show_help: false,
            width,
            height,
            auction_list,
        }
    }

    /// Builds the view from start-up context, applying the configured query,
    /// category and page.
    ///
    /// An invalid endpoint or page size falls back to the defaults; the
    /// CLI validates both before the TUI starts.
    #[must_use]
    pub fn from_context(context: &SearchContext) -> Self {
        let mut state =
            SearchState::new(&context.base_url, context.page_size).unwrap_or_else(|error| {
                tracing::error!(%error, "invalid search context; using defaults");
                SearchState::default()
            });
        apply_start_criteria(
            &mut state,
            context.query.as_deref(),
            context.category.as_deref(),
            context.page,
        );
        Self::new(state).with_gateway(Arc::clone(&context.gateway))
    }

    /// Attaches the gateway used for page loads.
    #[must_use]
    pub fn with_gateway(mut self, gateway: Arc<dyn AuctionGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Returns the underlying search state.
    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Returns the list cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Returns true while the search field has focus.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    /// Returns true while the help overlay is shown.
    #[must_use]
    pub const fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Returns the auction under the cursor.
    #[must_use]
    pub fn selected_auction(&self) -> Option<&Auction> {
        self.state.auctions().get(self.cursor_position)
    }

    /// Returns the input context for key mapping.
    #[must_use]
    pub const fn input_context(&self) -> InputContext {
        if self.editing {
            InputContext::Editing
        } else {
            InputContext::Browsing
        }
    }

    /// Handles a message and returns an optional command.
    pub fn handle_message(&mut self, msg: &SearchMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_criteria() {
            return self.handle_criteria_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }
}

/// Applies start-up criteria in the same order a user would: a title search
/// wins over a category, and the page is applied last.
///
/// Totals are not yet known, so a page past the end is only clamped once
/// the first response arrives.
pub fn apply_start_criteria(
    state: &mut SearchState,
    query: Option<&str>,
    category: Option<&str>,
    page: u32,
) {
    if let Some(text) = query.map(str::trim).filter(|text| !text.is_empty()) {
        state.set_search_text(text);
        state.submit_search();
    } else if let Some(label) = category {
        state.select_category(label);
    }
    state.paginate(page);
}
