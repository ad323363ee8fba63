//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use gavel::auctions::SearchState;
use gavel::tui::components::{
    AuctionListComponent, AuctionListViewContext, PaginationComponent, PaginationViewContext,
};
use gavel::{ClientError, Review, ReviewComponent};

/// Writes one loaded page of search results to the given writer.
///
/// The layout follows the interactive view: a result count, the range label,
/// one row per auction and a pagination line when there is more than one
/// page.
pub fn write_search_listing<W: Write>(
    writer: &mut W,
    state: &SearchState,
) -> Result<(), ClientError> {
    if let Some(error) = state.error() {
        return writeln!(writer, "{error}").map_err(|e| io_error(&e));
    }

    let page_info = state.page_info();
    writeln!(writer, "Category: {}", state.category_label()).map_err(|e| io_error(&e))?;
    if page_info.total_elements() == 0 {
        return writeln!(writer, "Can't find what you are looking for?")
            .map_err(|e| io_error(&e));
    }

    writeln!(writer, "Number of results: {}", page_info.total_elements())
        .map_err(|e| io_error(&e))?;
    writeln!(writer, "{}:", page_info.range_label()).map_err(|e| io_error(&e))?;

    let auctions = state.auctions();
    let rows = AuctionListComponent::new().view(&AuctionListViewContext {
        auctions,
        cursor_position: usize::MAX,
        scroll_offset: 0,
        visible_height: auctions.len(),
        max_width: 0,
    });
    write!(writer, "{rows}").map_err(|e| io_error(&e))?;

    let pagination = PaginationComponent::new().view(&PaginationViewContext { page_info });
    write!(writer, "{pagination}").map_err(|e| io_error(&e))
}

/// Writes every review, separated by blank lines.
///
/// A review whose date cannot be parsed fails the whole run.
pub fn write_reviews<W: Write>(writer: &mut W, reviews: &[Review]) -> Result<(), ClientError> {
    if reviews.is_empty() {
        return writeln!(writer, "No reviews yet.").map_err(|e| io_error(&e));
    }

    let component = ReviewComponent::new();
    for (index, review) in reviews.iter().enumerate() {
        if index > 0 {
            writeln!(writer).map_err(|e| io_error(&e))?;
        }
        write!(writer, "{}", component.view(review)?).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Converts an I/O error to a [`ClientError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ClientError {
    ClientError::Io {
        message: error.to_string(),
    }
}
