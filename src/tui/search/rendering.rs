//! View rendering for the search view.

use crate::tui::components::{
    AuctionListViewContext, PaginationComponent, PaginationViewContext,
};

use super::SearchApp;

const NO_RESULTS: &str = "Can't find what you are looking for?";

impl SearchApp {
    /// Renders the header with a loading indicator.
    pub(super) fn render_header(&self) -> String {
        let title = "Gavel - Auction Search";
        let loading_indicator = if self.state.is_loading() {
            " [Loading...]"
        } else {
            ""
        };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the search field; a trailing cursor marks focus.
    pub(super) fn render_search_line(&self) -> String {
        let text = self.state.search_text();
        if self.editing {
            format!("Search: {text}_\n")
        } else if text.is_empty() {
            "Search: (press / to search)\n".to_owned()
        } else {
            format!("Search: {text}\n")
        }
    }

    pub(super) fn render_category_line(&self) -> String {
        format!("Category: {}\n", self.state.category_label())
    }

    /// Renders the result count, range label, rows and pagination bar.
    pub(super) fn render_results(&self) -> String {
        if self.state.error().is_some() {
            return "  Press r to try again.\n".to_owned();
        }

        let info = self.state.page_info();
        if self.state.auctions().is_empty() {
            if self.state.is_loading() {
                return "  Loading auctions...\n".to_owned();
            }
            if info.total_elements() == 0 {
                return format!("{NO_RESULTS}\n");
            }
        }

        let mut output = format!(
            "Number of results: {}\n{}:\n",
            info.total_elements(),
            info.range_label()
        );
        let list_ctx = AuctionListViewContext {
            auctions: self.state.auctions(),
            cursor_position: self.cursor_position,
            scroll_offset: self.scroll_offset,
            visible_height: self.auction_list.visible_height(),
            max_width: usize::from(self.width.max(1)),
        };
        output.push_str(&self.auction_list.view(&list_ctx));
        let pagination = PaginationViewContext { page_info: info };
        output.push_str(&PaginationComponent::new().view(&pagination));
        output
    }

    /// Renders the status bar with the error or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        if let Some(error) = self.state.error() {
            return format!("Error: {error}\n");
        }
        if self.editing {
            return "Enter:search  Esc:cancel\n".to_owned();
        }
        "j/k:move  n/p:page  c:category  /:search  r:reload  ?:help  q:quit\n".to_owned()
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Results:
  j, Down    Move cursor down
  k, Up      Move cursor up
  Home, g    Go to first row
  End, G     Go to last row

Pages:
  n, Right   Next page
  p, Left    Previous page

Search:
  /          Edit search text
  Enter      Run search
  Esc        Stop editing
  c          Cycle category

Other:
  r          Reload page
  ?          Toggle this help
  q          Quit

Press any key to close this help.
";
        help_text.to_owned()
    }
}
