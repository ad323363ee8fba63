//! Pagination bar for the search view.

use crate::auctions::PageInfo;

/// Context for rendering the pagination bar.
#[derive(Debug, Clone, Copy)]
pub struct PaginationViewContext<'a> {
    /// Pagination state of the loaded page.
    pub page_info: &'a PageInfo,
}

/// Renders `Page X of Y` with previous/next hints.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationComponent;

impl PaginationComponent {
    /// Creates the component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the bar, or nothing when there is a single page.
    #[must_use]
    pub fn view(&self, ctx: &PaginationViewContext<'_>) -> String {
        let info = ctx.page_info;
        if info.total_pages() <= 1 {
            return String::new();
        }

        let previous = if info.has_prev() { "< p  " } else { "     " };
        let next = if info.has_next() { "  n >" } else { "" };
        format!(
            "{previous}Page {} of {}{next}\n",
            info.current_page(),
            info.total_pages()
        )
    }
}
