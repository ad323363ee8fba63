//! Startup context storage for the search and chat TUIs.
//!
//! bubbletea-rs constructs models through `Model::init()`, which takes no
//! arguments, so the CLI wiring parks everything a model needs in `OnceLock`
//! values before the program starts.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crossterm::terminal;

use crate::auctions::AuctionGateway;
use crate::chat::MessagingTransport;
use crate::telemetry::{NoopTelemetrySink, TelemetrySink};

/// Global storage for initial terminal dimensions.
///
/// This is set before the TUI program starts so the first frame uses the
/// actual terminal size.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Global storage for the search view's gateway and starting criteria.
static SEARCH_CONTEXT: OnceLock<SearchContext> = OnceLock::new();

/// Global storage for the chat view's transport and identity.
static CHAT_CONTEXT: OnceLock<ChatContext> = OnceLock::new();

/// Global storage for telemetry sink.
static TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Static fallback telemetry sink to avoid allocations on each call.
static DEFAULT_TELEMETRY_SINK: OnceLock<Arc<dyn TelemetrySink>> = OnceLock::new();

/// Everything the search view needs to issue its first fetch.
#[derive(Clone)]
pub struct SearchContext {
    /// Gateway used for every page load.
    pub gateway: Arc<dyn AuctionGateway>,
    /// Auction resource endpoint.
    pub base_url: String,
    /// Auctions per page.
    pub page_size: u32,
    /// Title search applied before the first fetch.
    pub query: Option<String>,
    /// Category applied before the first fetch.
    pub category: Option<String>,
    /// 1-based starting page.
    pub page: u32,
}

impl fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("query", &self.query)
            .field("category", &self.category)
            .field("page", &self.page)
            .finish_non_exhaustive()
    }
}

/// Everything the chat view needs to open a session.
#[derive(Clone)]
pub struct ChatContext {
    /// Messaging transport shared with the session.
    pub transport: Arc<dyn MessagingTransport>,
    /// Messaging endpoint.
    pub endpoint: String,
    /// Display name handed over by the identity provider, if any.
    pub display_name: Option<String>,
    /// Set when the transport routes messages in-process and never reaches
    /// `endpoint`.
    pub local_only: bool,
}

impl fmt::Debug for ChatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatContext")
            .field("endpoint", &self.endpoint)
            .field("display_name", &self.display_name)
            .field("local_only", &self.local_only)
            .finish_non_exhaustive()
    }
}

/// Sets the initial terminal dimensions for the TUI application.
///
/// This should be called before starting the bubbletea-rs program so the
/// initial render can use the actual terminal size instead of fallbacks.
///
/// # Returns
///
/// `true` if the dimensions were set, `false` if they were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Sets the search context read by `SearchApp::init()`.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_search_context(context: SearchContext) -> bool {
    SEARCH_CONTEXT.set(context).is_ok()
}

/// Sets the chat context read by `ChatApp::init()`.
///
/// # Returns
///
/// `true` if the context was set, `false` if it was already set.
pub fn set_chat_context(context: ChatContext) -> bool {
    CHAT_CONTEXT.set(context).is_ok()
}

/// Sets the telemetry sink shared by both views.
///
/// Without this, a no-op sink is used.
///
/// # Returns
///
/// `true` if the sink was set, `false` if it was already set.
pub fn set_telemetry_sink(sink: Arc<dyn TelemetrySink>) -> bool {
    TELEMETRY_SINK.set(sink).is_ok()
}

pub(crate) fn get_search_context() -> Option<SearchContext> {
    SEARCH_CONTEXT.get().cloned()
}

pub(crate) fn get_chat_context() -> Option<ChatContext> {
    CHAT_CONTEXT.get().cloned()
}

/// Gets the telemetry sink, returning a no-op sink if not configured.
pub(crate) fn get_telemetry_sink() -> Arc<dyn TelemetrySink> {
    TELEMETRY_SINK.get().cloned().unwrap_or_else(|| {
        Arc::clone(DEFAULT_TELEMETRY_SINK.get_or_init(|| Arc::new(NoopTelemetrySink)))
    })
}

/// Gets the initial terminal dimensions from storage.
///
/// Falls back to the live terminal size and then to 80x24.
pub(crate) fn get_initial_terminal_size() -> (u16, u16) {
    const DEFAULT_WIDTH: u16 = 80;
    const DEFAULT_HEIGHT: u16 = 24;

    INITIAL_TERMINAL_SIZE
        .get()
        .copied()
        .filter(|(width, height)| *width > 0 && *height > 0)
        .or_else(|| {
            terminal::size()
                .ok()
                .filter(|(width, height)| *width > 0 && *height > 0)
        })
        .unwrap_or((DEFAULT_WIDTH, DEFAULT_HEIGHT))
}
