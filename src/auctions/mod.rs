//! Auction search: models, URL templates, the search view state machine, and
//! the HTTP gateway that loads listing pages.
//!
//! The REST API pages from zero and wraps results in a HAL-style envelope
//! (`_embedded.auctions` plus `page` metadata). Everything above the gateway
//! works with 1-based pages and plain [`Auction`] values.

pub mod gateway;
pub mod intake;
pub mod models;
pub mod pagination;
pub mod search;
pub mod state;

pub use gateway::{AuctionGateway, ReqwestAuctionGateway};
#[cfg(test)]
pub use gateway::MockAuctionGateway;
pub use intake::AuctionIntake;
pub use models::{Auction, AuctionPage};
pub use pagination::PageInfo;
pub use search::{Category, PAGE_PLACEHOLDER, SearchCriteria, SearchTemplate};
pub use state::{
    ALL_CATEGORIES_LABEL, DEFAULT_CATEGORY_LABEL, FetchOutcome, FetchTicket, GENERIC_LOAD_ERROR,
    PageRequest, SearchState,
};
