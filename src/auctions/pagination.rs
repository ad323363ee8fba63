//! Pagination state and range arithmetic for auction listings.
//!
//! The auction API pages from zero while the UI counts from one. `PageInfo`
//! stores the 1-based page and converts at the request boundary.

/// Current page state for paginated auction results.
///
/// # Example
///
/// ```
/// use gavel::auctions::PageInfo;
///
/// let info = PageInfo::new(2, 5).with_totals(12, 3);
/// assert_eq!(info.item_range(), (5, 10));
/// assert_eq!(info.range_label(), "5 to 10 of 12 items");
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    page_size: u32,
    /// Total number of matching auctions.
    total_elements: u64,
    /// Total number of pages reported by the server.
    total_pages: u32,
}

impl PageInfo {
    /// Creates page info with unknown totals.
    ///
    /// A zero page is treated as the first page.
    #[must_use]
    pub const fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page: if current_page == 0 { 1 } else { current_page },
            page_size,
            total_elements: 0,
            total_pages: 0,
        }
    }

    /// Sets the totals reported by the server.
    #[must_use]
    pub const fn with_totals(mut self, total_elements: u64, total_pages: u32) -> Self {
        self.total_elements = total_elements;
        self.total_pages = total_pages;
        self
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the zero-based page index used on the wire.
    #[must_use]
    pub const fn zero_based_page(&self) -> u32 {
        self.current_page.saturating_sub(1)
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the total number of matching auctions.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Returns true if more pages exist after the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Returns the displayed item range as `(lower, upper)`.
    ///
    /// The lower bound is `(page - 1) * size`; the upper bound is
    /// `page * size` clamped to the total element count.
    #[must_use]
    pub fn item_range(&self) -> (u64, u64) {
        let size = u64::from(self.page_size);
        let upper_unclamped = u64::from(self.current_page).saturating_mul(size);
        let lower = upper_unclamped.saturating_sub(size);
        (lower, upper_unclamped.min(self.total_elements))
    }

    /// Renders the range as `"{lower} to {upper} of {total} items"`.
    #[must_use]
    pub fn range_label(&self) -> String {
        let (lower, upper) = self.item_range();
        format!("{lower} to {upper} of {} items", self.total_elements)
    }

    /// Clamps a requested page into `1..=total_pages`.
    ///
    /// When totals are unknown only the lower bound applies.
    #[must_use]
    pub fn clamp_page(&self, requested: u32) -> u32 {
        let floor = requested.max(1);
        if self.total_pages == 0 {
            floor
        } else {
            floor.min(self.total_pages)
        }
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 5)
    }
}
