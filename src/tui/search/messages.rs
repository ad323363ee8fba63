//! Message types for the search view update loop.

use crate::auctions::{AuctionPage, FetchTicket};
use crate::error::ClientError;

/// Messages for the auction search TUI.
#[derive(Debug, Clone)]
pub enum SearchMsg {
    // Navigation
    /// Move cursor up one row.
    CursorUp,
    /// Move cursor down one row.
    CursorDown,
    /// Move cursor to the first row.
    CursorHome,
    /// Move cursor to the last row.
    CursorEnd,

    // Criteria
    /// Load the next page.
    NextPage,
    /// Load the previous page.
    PreviousPage,
    /// Select the next category.
    CycleCategory,
    /// Start editing the search text.
    StartEditing,
    /// Leave the search field without submitting.
    CancelEditing,
    /// Apply the search text.
    SubmitSearch,
    /// Append a character to the search text.
    InputChar(char),
    /// Delete the last character of the search text.
    Backspace,

    // Data loading
    /// Fetch the current page again.
    Reload,
    /// A fetch finished.
    FetchCompleted {
        /// Ticket the fetch was issued under.
        ticket: FetchTicket,
        /// Gateway result.
        result: Result<AuctionPage, ClientError>,
    },

    // Application lifecycle
    /// First message after start-up; triggers the initial fetch.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl SearchMsg {
    /// Returns true for cursor movement within the loaded page.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp | Self::CursorDown | Self::CursorHome | Self::CursorEnd
        )
    }

    /// Returns true for messages that change the search criteria or page.
    #[must_use]
    pub const fn is_criteria(&self) -> bool {
        matches!(
            self,
            Self::NextPage
                | Self::PreviousPage
                | Self::CycleCategory
                | Self::StartEditing
                | Self::CancelEditing
                | Self::SubmitSearch
                | Self::InputChar(_)
                | Self::Backspace
        )
    }

    /// Returns true for fetch requests and results.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::Reload | Self::FetchCompleted { .. } | Self::Initialized
        )
    }
}
