//! Non-interactive search: load one page and print it.

use std::io::{self, Write};

use gavel::auctions::AuctionGateway;
use gavel::telemetry::TracingTelemetrySink;
use gavel::tui::apply_start_criteria;
use gavel::{AuctionIntake, ClientError, GavelConfig, ReqwestAuctionGateway, SearchState};

use super::output::write_search_listing;

/// Prints the page selected by the configured query, category and page.
///
/// # Errors
///
/// Returns [`ClientError::Api`], [`ClientError::Network`] or
/// [`ClientError::Decode`] when the page cannot be loaded, and
/// [`ClientError::Io`] when stdout cannot be written.
pub async fn run(config: &GavelConfig) -> Result<(), ClientError> {
    let gateway = ReqwestAuctionGateway::with_default_timeout()?;
    let mut stdout = io::stdout().lock();
    run_with_gateway(config, &gateway, &mut stdout).await
}

/// Prints one page using the supplied gateway.
///
/// This function is exposed for testing with mock servers.
pub async fn run_with_gateway<G, W>(
    config: &GavelConfig,
    gateway: &G,
    writer: &mut W,
) -> Result<(), ClientError>
where
    G: AuctionGateway + ?Sized,
    W: Write,
{
    let mut state = SearchState::new(&config.api_base_url, config.page_size)?;
    apply_start_criteria(
        &mut state,
        config.query(),
        config.category.as_deref(),
        config.page,
    );

    let telemetry = TracingTelemetrySink;
    AuctionIntake::new(gateway)
        .with_telemetry(&telemetry)
        .load(&mut state)
        .await?;
    write_search_listing(writer, &state)
}

#[cfg(test)]
mod tests {
    use gavel::auctions::models::test_support::envelope_json;
    use gavel::{ClientError, GavelConfig, ReqwestAuctionGateway};
    use rstest::rstest;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::run_with_gateway;

    fn config_for(server: &MockServer) -> GavelConfig {
        GavelConfig {
            api_base_url: format!("{}/api/auctions", server.uri()),
            ..GavelConfig::default()
        }
    }

    async fn run_against(config: &GavelConfig) -> (Result<(), ClientError>, String) {
        let gateway = ReqwestAuctionGateway::with_default_timeout().expect("gateway");
        let mut buffer = Vec::new();
        let result = run_with_gateway(config, &gateway, &mut buffer).await;
        (result, String::from_utf8(buffer).expect("utf-8 output"))
    }

    #[rstest]
    #[tokio::test]
    async fn prints_first_page_of_unfiltered_listing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .and(query_param("page", "0"))
            .and(query_param("size", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope_json(&["Lamp", "Chair"], 2, 1)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (result, output) = run_against(&config_for(&server)).await;

        assert_eq!(result, Ok(()));
        assert!(output.contains("Number of results: 2\n0 to 2 of 2 items:\n"));
        assert!(output.contains("  Lamp [Electronic]  from 10.50"));
    }

    #[rstest]
    #[tokio::test]
    async fn query_and_page_select_the_title_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions/search/findByTitleContaining"))
            .and(query_param("title", "oak desk"))
            .and(query_param("page", "1"))
            .and(query_param("size", "5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope_json(&["Oak desk"], 6, 2)),
            )
            .expect(1)
            .mount(&server)
            .await;
        let config = GavelConfig {
            query: Some("oak desk".to_owned()),
            page: 2,
            ..config_for(&server)
        };

        let (result, output) = run_against(&config).await;

        assert_eq!(result, Ok(()));
        assert!(output.contains("5 to 6 of 6 items:"));
        assert!(output.contains("Page 2 of 2"));
    }

    #[rstest]
    #[tokio::test]
    async fn page_past_the_end_falls_back_to_the_last_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .and(query_param("page", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(&[], 6, 2)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .and(query_param("page", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope_json(&["Oak desk"], 6, 2)),
            )
            .expect(1)
            .mount(&server)
            .await;
        let config = GavelConfig {
            page: 5,
            ..config_for(&server)
        };

        let (result, output) = run_against(&config).await;

        assert_eq!(result, Ok(()));
        assert!(output.contains("5 to 6 of 6 items:"), "{output}");
        assert!(output.contains("  Oak desk"));
        assert!(output.contains("Page 2 of 2"));
    }

    #[rstest]
    #[tokio::test]
    async fn category_selects_the_category_search() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions/search/findByCategory"))
            .and(query_param("category", "Home & Garden"))
            .and(query_param("page", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope_json(&[], 0, 0)))
            .expect(1)
            .mount(&server)
            .await;
        let config = GavelConfig {
            category: Some("Home & Garden".to_owned()),
            ..config_for(&server)
        };

        let (result, output) = run_against(&config).await;

        assert_eq!(result, Ok(()));
        assert!(output.contains("Category: Home & Garden"));
        assert!(output.contains("Can't find what you are looking for?"));
    }

    #[rstest]
    #[tokio::test]
    async fn server_error_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auctions"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (result, output) = run_against(&config_for(&server)).await;

        assert!(matches!(result, Err(ClientError::Api { status: 503, .. })));
        assert!(output.is_empty());
    }
}
