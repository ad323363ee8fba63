//! Search view state machine.
//!
//! `SearchState` owns everything the auction search view renders: the active
//! criteria, the current page, the last loaded page of auctions, and the
//! loading/error flags. Fetches are sequenced by a generation counter so a
//! response for a superseded request can never overwrite fresher state.

use url::Url;

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::error::ClientError;

use super::models::{Auction, AuctionPage};
use super::pagination::PageInfo;
use super::search::{Category, SearchCriteria, SearchTemplate};

/// Category label shown before any category has been chosen.
pub const DEFAULT_CATEGORY_LABEL: &str = "Auction Category";
/// Category label shown after falling back to the unfiltered listing.
pub const ALL_CATEGORIES_LABEL: &str = "All";
/// Generic message shown when a page fails to load.
pub const GENERIC_LOAD_ERROR: &str = "Something went wrong!";
/// Largest page size the client will request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A single page request issued by the search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Fully resolved request URL.
    pub url: Url,
    /// 1-based page the request is for.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
}

/// Handle for an in-flight fetch.
///
/// Only the ticket from the most recent [`SearchState::begin_fetch`] call is
/// accepted by [`SearchState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    request: PageRequest,
}

impl FetchTicket {
    /// Returns the generation this ticket was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the request to send.
    #[must_use]
    pub const fn request(&self) -> &PageRequest {
        &self.request
    }
}

/// Result of applying a fetch response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response belonged to the latest request and was stored.
    Applied,
    /// The response belonged to a superseded request and was dropped.
    Stale,
    /// The requested page lay past the last page. The state moved to the
    /// last page and a new fetch is due.
    Reclamped,
}

/// State backing the auction search view.
#[derive(Debug, Clone)]
pub struct SearchState {
    base_url: String,
    page_size: u32,
    current_page: u32,
    criteria: SearchCriteria,
    template: SearchTemplate,
    category_label: String,
    search_text: String,
    auctions: Vec<Auction>,
    page_info: PageInfo,
    loading: bool,
    error: Option<String>,
    generation: u64,
    scroll_to_top: bool,
}

impl SearchState {
    /// Creates a state for the given base endpoint and page size.
    ///
    /// The state starts on page 1 with no filter and in the loading state,
    /// mirroring a freshly mounted view.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPagination`] when `page_size` is outside
    /// `1..=100`, or [`ClientError::InvalidUrl`] when the base endpoint does
    /// not parse.
    pub fn new(base_url: &str, page_size: u32) -> Result<Self, ClientError> {
        validate_page_size(page_size)?;
        Url::parse(base_url)
            .map_err(|error| ClientError::InvalidUrl(format!("{base_url}: {error}")))?;
        Ok(Self::unchecked(base_url, page_size))
    }

    fn unchecked(base_url: &str, page_size: u32) -> Self {
        Self {
            base_url: base_url.to_owned(),
            page_size,
            current_page: 1,
            criteria: SearchCriteria::All,
            template: SearchTemplate::empty(),
            category_label: DEFAULT_CATEGORY_LABEL.to_owned(),
            search_text: String::new(),
            auctions: Vec::new(),
            page_info: PageInfo::new(1, page_size),
            loading: true,
            error: None,
            generation: 0,
            scroll_to_top: false,
        }
    }

    /// Issues a new fetch for the current page and template.
    ///
    /// Every call supersedes all earlier tickets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the composed URL does not
    /// parse. The state is left in the error state in that case.
    pub fn begin_fetch(&mut self) -> Result<FetchTicket, ClientError> {
        self.generation = self.generation.saturating_add(1);
        let zero_based = self.current_page.saturating_sub(1);

        match self
            .template
            .resolve(&self.base_url, zero_based, self.page_size)
        {
            Ok(url) => {
                self.loading = true;
                self.error = None;
                tracing::debug!(generation = self.generation, %url, "issuing auction fetch");
                Ok(FetchTicket {
                    generation: self.generation,
                    request: PageRequest {
                        url,
                        page: self.current_page,
                        page_size: self.page_size,
                    },
                })
            }
            Err(error) => {
                self.fail(&error);
                Err(error)
            }
        }
    }

    /// Applies the response for a ticket.
    ///
    /// Responses for superseded tickets are ignored and reported as
    /// [`FetchOutcome::Stale`]. A page past the reported page count is
    /// clamped to the last page and reported as [`FetchOutcome::Reclamped`];
    /// the state stays loading until the follow-up fetch is applied.
    pub fn apply(
        &mut self,
        ticket: &FetchTicket,
        result: Result<AuctionPage, ClientError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            tracing::warn!(
                stale = ticket.generation,
                latest = self.generation,
                "dropping response for superseded auction fetch"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(page) => {
                self.page_info = PageInfo::new(ticket.request.page, ticket.request.page_size)
                    .with_totals(
                        page.page_info.total_elements(),
                        page.page_info.total_pages(),
                    );
                let clamped = self.page_info.clamp_page(ticket.request.page);
                if clamped != ticket.request.page {
                    tracing::debug!(
                        requested = ticket.request.page,
                        last = clamped,
                        "requested page past the last page"
                    );
                    self.current_page = clamped;
                    self.page_info = PageInfo::new(clamped, ticket.request.page_size).with_totals(
                        page.page_info.total_elements(),
                        page.page_info.total_pages(),
                    );
                    return FetchOutcome::Reclamped;
                }
                self.auctions = page.items;
                self.loading = false;
                self.error = None;
                self.scroll_to_top = true;
            }
            Err(error) => self.fail(&error),
        }
        FetchOutcome::Applied
    }

    fn fail(&mut self, error: &ClientError) {
        tracing::warn!(%error, "auction fetch failed");
        self.loading = false;
        self.error = Some(format!("{GENERIC_LOAD_ERROR} ({error})"));
    }

    /// Replaces the search draft text without triggering a fetch.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Appends one character to the search draft.
    pub fn push_search_char(&mut self, character: char) {
        self.search_text.push(character);
    }

    /// Removes the last character of the search draft.
    pub fn pop_search_char(&mut self) {
        self.search_text.pop();
    }

    /// Applies the search draft.
    ///
    /// Resets to page 1. Empty text clears the template; otherwise a title
    /// search template is installed and the category label resets.
    ///
    /// Returns `true` when the page or template changed and a fetch is due.
    pub fn submit_search(&mut self) -> bool {
        let text = self.search_text.trim().to_owned();
        if text.is_empty() {
            self.set_criteria(SearchCriteria::All, SearchTemplate::empty())
        } else {
            self.category_label = DEFAULT_CATEGORY_LABEL.to_owned();
            let criteria = SearchCriteria::Title(text);
            let template = criteria.template(self.page_size);
            self.set_criteria(criteria, template)
        }
    }

    /// Selects a category by label.
    ///
    /// Labels outside the allow-list fall back to the unfiltered listing
    /// with the label "All". Always resets to page 1.
    ///
    /// Returns `true` when the page or template changed and a fetch is due.
    pub fn select_category(&mut self, value: &str) -> bool {
        match Category::from_label(value) {
            Some(category) => {
                self.category_label = category.label().to_owned();
                let criteria = SearchCriteria::Category(category);
                let template = criteria.template(self.page_size);
                self.set_criteria(criteria, template)
            }
            None => {
                self.category_label = ALL_CATEGORIES_LABEL.to_owned();
                let template = SearchCriteria::All.template(self.page_size);
                self.set_criteria(SearchCriteria::All, template)
            }
        }
    }

    /// Advances to the category after the current one, wrapping back to
    /// "All" after the last.
    ///
    /// Returns `true` when a fetch is due.
    pub fn cycle_category(&mut self) -> bool {
        let next = match &self.criteria {
            SearchCriteria::Category(current) => Category::ALL
                .iter()
                .skip_while(|category| *category != current)
                .nth(1)
                .copied(),
            SearchCriteria::All | SearchCriteria::Title(_) => Category::ALL.first().copied(),
        };
        let label = next.map_or(ALL_CATEGORIES_LABEL, Category::label);
        self.select_category(label)
    }

    fn set_criteria(&mut self, criteria: SearchCriteria, template: SearchTemplate) -> bool {
        let changed = self.current_page != 1 || self.template != template;
        self.current_page = 1;
        self.criteria = criteria;
        self.template = template;
        changed
    }

    /// Moves to a 1-based page, clamped to the known page count.
    ///
    /// Returns `true` when the page changed and a fetch is due.
    pub fn paginate(&mut self, page: u32) -> bool {
        let target = self.page_info.clamp_page(page);
        let changed = target != self.current_page;
        self.current_page = target;
        changed
    }

    /// Moves to the next page if one exists.
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.page_info.total_pages() {
            return false;
        }
        self.paginate(self.current_page.saturating_add(1))
    }

    /// Moves to the previous page if one exists.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.paginate(self.current_page.saturating_sub(1))
    }

    /// Returns and clears the pending scroll-to-top request.
    pub const fn take_scroll_to_top(&mut self) -> bool {
        let pending = self.scroll_to_top;
        self.scroll_to_top = false;
        pending
    }

    /// Returns the loaded auctions.
    #[must_use]
    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    /// Returns pagination state for the loaded page.
    #[must_use]
    pub const fn page_info(&self) -> &PageInfo {
        &self.page_info
    }

    /// Returns the 1-based page the view is on.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the active criteria.
    #[must_use]
    pub const fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    /// Returns the active URL template.
    #[must_use]
    pub const fn template(&self) -> &SearchTemplate {
        &self.template
    }

    /// Returns the label of the category selector.
    #[must_use]
    pub fn category_label(&self) -> &str {
        &self.category_label
    }

    /// Returns the search draft text.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Returns true while a fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the display error, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Default for SearchState {
    /// State for the default endpoint and page size.
    fn default() -> Self {
        Self::unchecked(DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE)
    }
}

fn validate_page_size(page_size: u32) -> Result<(), ClientError> {
    if page_size == 0 {
        return Err(ClientError::InvalidPagination {
            message: "page size must be at least 1".to_owned(),
        });
    }
    if page_size > MAX_PAGE_SIZE {
        return Err(ClientError::InvalidPagination {
            message: format!("page size must not exceed {MAX_PAGE_SIZE}"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
