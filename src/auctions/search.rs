//! Search criteria and the URL templates they compose.
//!
//! A template is the path-and-query fragment appended to the auction base
//! endpoint. It carries a `<pageNumber>` placeholder that is replaced by the
//! zero-based page index when a request is issued.

use std::fmt;

use url::Url;
use url::form_urlencoded::byte_serialize;

use crate::error::ClientError;

/// Placeholder substituted with the zero-based page index.
pub const PAGE_PLACEHOLDER: &str = "<pageNumber>";

/// Auction categories accepted by the category filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Consumer electronics.
    Electronic,
    /// Clothing, accessories, and cosmetics.
    FashionAndBeauty,
    /// Farm produce and equipment.
    Agriculture,
    /// Furniture, tools, and garden supplies.
    HomeAndGarden,
}

impl Category {
    /// Every filterable category in display order.
    pub const ALL: [Self; 4] = [
        Self::Electronic,
        Self::FashionAndBeauty,
        Self::Agriculture,
        Self::HomeAndGarden,
    ];

    /// Returns the label used both in the UI and as the API parameter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Electronic => "Electronic",
            Self::FashionAndBeauty => "Fashion & Beauty",
            Self::Agriculture => "Agriculture",
            Self::HomeAndGarden => "Home & Garden",
        }
    }

    /// Looks up a category by its exact label.
    ///
    /// Returns `None` for anything outside the allow-list, including
    /// differently cased labels.
    #[must_use]
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the listing is currently filtered by.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchCriteria {
    /// Unfiltered listing.
    #[default]
    All,
    /// Auctions whose title contains the text.
    Title(String),
    /// Auctions in one category.
    Category(Category),
}

impl SearchCriteria {
    /// Composes the URL template for these criteria.
    #[must_use]
    pub fn template(&self, page_size: u32) -> SearchTemplate {
        let fragment = match self {
            Self::All => format!("?page={PAGE_PLACEHOLDER}&size={page_size}"),
            Self::Title(text) => format!(
                "/search/findByTitleContaining?title={}&page={PAGE_PLACEHOLDER}&size={page_size}",
                encode_query_value(text)
            ),
            Self::Category(category) => format!(
                "/search/findByCategory?category={}&page={PAGE_PLACEHOLDER}&size={page_size}",
                encode_query_value(category.label())
            ),
        };
        SearchTemplate::from_fragment(fragment)
    }
}

/// URL fragment appended to the base endpoint.
///
/// An empty template means the default listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchTemplate {
    fragment: Option<String>,
}

impl SearchTemplate {
    /// Creates the empty template (unfiltered listing).
    #[must_use]
    pub const fn empty() -> Self {
        Self { fragment: None }
    }

    /// Wraps an explicit fragment.
    #[must_use]
    pub const fn from_fragment(fragment: String) -> Self {
        Self {
            fragment: Some(fragment),
        }
    }

    /// Returns the raw fragment, placeholder included.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Returns true when no fragment is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fragment.is_none()
    }

    /// Resolves the request URL for a zero-based page.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the composed URL does not
    /// parse.
    pub fn resolve(
        &self,
        base_url: &str,
        zero_based_page: u32,
        page_size: u32,
    ) -> Result<Url, ClientError> {
        let base = base_url.trim_end_matches('/');
        let composed = match &self.fragment {
            None => format!("{base}?page={zero_based_page}&size={page_size}"),
            Some(fragment) => {
                let with_page = fragment.replace(PAGE_PLACEHOLDER, &zero_based_page.to_string());
                format!("{base}{with_page}")
            }
        };
        Url::parse(&composed)
            .map_err(|error| ClientError::InvalidUrl(format!("{composed}: {error}")))
    }
}

fn encode_query_value(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}
