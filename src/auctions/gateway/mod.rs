//! Gateways for loading auction pages over HTTP.
//!
//! The trait keeps the search view independent of the HTTP client so that
//! tests can substitute mocks, while the reqwest implementation handles real
//! requests.

mod error_mapping;
mod reqwest_gateway;

pub use reqwest_gateway::ReqwestAuctionGateway;

use async_trait::async_trait;

use crate::auctions::models::AuctionPage;
use crate::auctions::state::PageRequest;
use crate::error::ClientError;

/// Gateway that can load one page of auctions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuctionGateway: Send + Sync {
    /// Fetch the page described by the request.
    async fn fetch_page(&self, request: &PageRequest) -> Result<AuctionPage, ClientError>;
}
