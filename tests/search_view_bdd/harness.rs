//! Mock server fixtures for the search view BDD tests.

use gavel::auctions::models::test_support::envelope_json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::runtime::SharedRuntime;

pub(crate) const LISTING_PATH: &str = "/api/auctions";

/// Builds an envelope of `count` auctions named after their position.
pub(crate) fn titled_envelope(
    prefix: &str,
    count: u64,
    total: u64,
    pages: u32,
) -> serde_json::Value {
    let names: Vec<String> = (1..=count).map(|index| format!("{prefix} {index}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    envelope_json(&refs, total, pages)
}

/// Mounts one response per server page for an unfiltered listing.
pub(crate) fn mount_listing_pages(
    runtime: &SharedRuntime,
    server: &MockServer,
    total: u64,
    page_size: u64,
) {
    let pages = total.div_ceil(page_size);
    let total_pages = u32::try_from(pages).unwrap_or(u32::MAX);
    for page in 0..pages {
        let remaining = total.saturating_sub(page.saturating_mul(page_size));
        let body = titled_envelope("Lot", remaining.min(page_size), total, total_pages);
        let mock = Mock::given(method("GET"))
            .and(path(LISTING_PATH))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body));
        runtime.block_on(mock.mount(server));
    }
}

/// Mounts a single response for `route`.
pub(crate) fn mount_response(
    runtime: &SharedRuntime,
    server: &MockServer,
    route: &str,
    response: ResponseTemplate,
) {
    let mock = Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response);
    runtime.block_on(mock.mount(server));
}

/// Mounts the category search response for `category`.
pub(crate) fn mount_category(
    runtime: &SharedRuntime,
    server: &MockServer,
    category: &str,
    response: ResponseTemplate,
) {
    let mock = Mock::given(method("GET"))
        .and(path("/api/auctions/search/findByCategory"))
        .and(query_param("category", category))
        .respond_with(response);
    runtime.block_on(mock.mount(server));
}
