//! reqwest implementation of the auction gateway.

use std::time::Duration;

use async_trait::async_trait;
use http::header::ACCEPT;
use reqwest::Client;

use crate::auctions::models::AuctionPage;
use crate::auctions::state::PageRequest;
use crate::error::ClientError;

use super::AuctionGateway;
use super::error_mapping::{extract_error_message, map_http_error, map_reqwest_error};

const OPERATION: &str = "load auctions";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// reqwest-backed gateway.
#[derive(Debug, Clone)]
pub struct ReqwestAuctionGateway {
    client: Client,
}

impl ReqwestAuctionGateway {
    /// Creates a new gateway from a reqwest client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a gateway with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn with_default_timeout() -> Result<Self, ClientError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Builds a gateway whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        Client::builder()
            .timeout(timeout)
            .build()
            .map(Self::new)
            .map_err(|error| ClientError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })
    }
}

#[async_trait]
impl AuctionGateway for ReqwestAuctionGateway {
    async fn fetch_page(&self, request: &PageRequest) -> Result<AuctionPage, ClientError> {
        let response = self
            .client
            .get(request.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| map_reqwest_error(OPERATION, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_reqwest_error(OPERATION, &error))?;

        if !status.is_success() {
            return Err(map_http_error(
                OPERATION,
                status,
                extract_error_message(&body),
            ));
        }

        AuctionPage::from_json(&body, request.page, request.page_size)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::auctions::models::test_support::envelope_json;

    fn request_for(server: &MockServer, suffix: &str, page: u32) -> PageRequest {
        let url = Url::parse(&format!("{}/api/auctions{suffix}", server.uri()))
            .expect("mock URL should parse");
        PageRequest {
            url,
            page,
            page_size: 5,
        }
    }

    #[tokio::test]
    async fn fetch_page_decodes_listing_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .and(query_param("page", "1"))
            .and(query_param("size", "5"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope_json(&["Lamp", "Chair", "Desk", "Rug", "Vase"], 12, 3)),
            )
            .mount(&server)
            .await;

        let gateway = ReqwestAuctionGateway::with_default_timeout().expect("gateway");
        let page = gateway
            .fetch_page(&request_for(&server, "?page=1&size=5", 2))
            .await
            .expect("page should load");

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page_info.range_label(), "5 to 10 of 12 items");
    }

    #[tokio::test]
    async fn fetch_page_maps_server_error_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "status": 500,
                "error": "Internal Server Error",
                "message": "database unavailable"
            })))
            .mount(&server)
            .await;

        let gateway = ReqwestAuctionGateway::with_default_timeout().expect("gateway");
        let result = gateway
            .fetch_page(&request_for(&server, "?page=0&size=5", 1))
            .await;

        match result {
            Err(ClientError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert!(
                    message.contains("database unavailable"),
                    "unexpected message: {message}"
                );
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_page_rejects_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions/search/findByCategory"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "auctions": [] })))
            .mount(&server)
            .await;

        let gateway = ReqwestAuctionGateway::with_default_timeout().expect("gateway");
        let result = gateway
            .fetch_page(&request_for(
                &server,
                "/search/findByCategory?category=Electronic&page=0&size=5",
                1,
            ))
            .await;

        assert!(
            matches!(result, Err(ClientError::Decode { .. })),
            "expected decode error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn fetch_page_reports_network_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind local port");
        let address = listener.local_addr().expect("local address");
        drop(listener);
        let request = PageRequest {
            url: Url::parse(&format!("http://{address}/api/auctions?page=0&size=5"))
                .expect("closed-port URL should parse"),
            page: 1,
            page_size: 5,
        };

        let gateway = ReqwestAuctionGateway::with_default_timeout().expect("gateway");
        let result = gateway.fetch_page(&request).await;

        assert!(
            matches!(result, Err(ClientError::Network { .. })),
            "expected network error, got {result:?}"
        );
    }
}
