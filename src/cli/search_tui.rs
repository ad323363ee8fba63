//! TUI mode for browsing auctions.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use gavel::telemetry::TracingTelemetrySink;
use gavel::tui::{
    SearchApp, SearchContext, set_initial_terminal_size, set_search_context, set_telemetry_sink,
};
use gavel::{AuctionGateway, ClientError, GavelConfig, ReqwestAuctionGateway};

/// Runs the interactive auction search.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the TUI fails to
/// initialise. Page load failures are shown inside the view instead.
pub async fn run(config: &GavelConfig) -> Result<(), ClientError> {
    let gateway = ReqwestAuctionGateway::with_default_timeout()?;

    // Model::init() takes no arguments, so the context goes into
    // module-level storage first. A second run in the same process keeps
    // the first context.
    let _ = set_search_context(search_context(config, Arc::new(gateway)));
    let _ = set_telemetry_sink(Arc::new(TracingTelemetrySink));
    if let Ok((width, height)) = crossterm::terminal::size() {
        let _ = set_initial_terminal_size(width, height);
    }

    run_tui().await.map_err(|error| ClientError::Io {
        message: format!("TUI error: {error}"),
    })
}

/// Builds the start-up context from configuration.
#[must_use]
pub fn search_context(config: &GavelConfig, gateway: Arc<dyn AuctionGateway>) -> SearchContext {
    SearchContext {
        gateway,
        base_url: config.api_base_url.clone(),
        page_size: config.page_size,
        query: config.query().map(ToOwned::to_owned),
        category: config.category.clone(),
        page: config.page,
    }
}

async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<SearchApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use gavel::tui::SearchApp;
    use gavel::{GavelConfig, ReqwestAuctionGateway};
    use rstest::rstest;

    use super::search_context;

    #[rstest]
    fn context_carries_start_criteria() {
        let config = GavelConfig {
            query: Some("  lamp ".to_owned()),
            category: Some("Electronic".to_owned()),
            page: 3,
            ..GavelConfig::default()
        };
        let gateway = Arc::new(ReqwestAuctionGateway::with_default_timeout().expect("gateway"));

        let context = search_context(&config, gateway);

        assert_eq!(context.query.as_deref(), Some("lamp"));
        assert_eq!(context.category.as_deref(), Some("Electronic"));
        assert_eq!(context.page, 3);
        assert_eq!(context.page_size, 5);
    }

    #[rstest]
    fn view_built_from_context_starts_loading() {
        let gateway = Arc::new(ReqwestAuctionGateway::with_default_timeout().expect("gateway"));
        let context = search_context(&GavelConfig::default(), gateway);

        let app = SearchApp::from_context(&context);

        assert!(app.state().is_loading());
        assert_eq!(app.state().current_page(), 1);
    }
}
