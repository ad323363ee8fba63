//! Auction list component for the search view.
//!
//! Renders the visible window of the loaded page with a cursor marker. Each
//! row shows the lot name, category, starting price and closing time.

use crate::auctions::Auction;

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Default visible height for the auction list component.
const DEFAULT_VISIBLE_HEIGHT: usize = 10;

/// Context for rendering the auction list view.
#[derive(Debug, Clone)]
pub struct AuctionListViewContext<'a> {
    /// Auctions on the loaded page.
    pub auctions: &'a [Auction],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Number of rows scrolled from the top.
    pub scroll_offset: usize,
    /// Maximum visible height in rows. Zero uses the component default.
    pub visible_height: usize,
    /// Maximum row width in columns. Zero disables truncation.
    pub max_width: usize,
}

/// Component for displaying one page of auctions.
#[derive(Debug, Clone)]
pub struct AuctionListComponent {
    visible_height: usize,
}

impl Default for AuctionListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AuctionListComponent {
    /// Creates a new auction list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height used when the context does not set one.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the rows inside the scroll window.
    #[must_use]
    pub fn view(&self, ctx: &AuctionListViewContext<'_>) -> String {
        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, auction) in ctx
            .auctions
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            let line = format_auction_line(auction, prefix);
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

fn format_auction_line(auction: &Auction, prefix: &str) -> String {
    let name = auction.name.as_deref().unwrap_or("(untitled)");
    let category = auction
        .category
        .as_deref()
        .map_or_else(String::new, |category| format!(" [{category}]"));
    let price = auction
        .starting_price
        .map_or_else(String::new, |price| format!("  from {price:.2}"));
    let closing = auction
        .closing_time
        .as_deref()
        .map_or_else(String::new, |closing| format!("  closes {closing}"));

    format!("{prefix} {name}{category}{price}{closing}")
}
