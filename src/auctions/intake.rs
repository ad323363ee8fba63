//! High-level facade that drives one fetch through the search state.

use std::time::Instant;

use crate::error::ClientError;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::gateway::AuctionGateway;
use super::models::AuctionPage;
use super::state::{FetchOutcome, FetchTicket, SearchState};

static NOOP_TELEMETRY: NoopTelemetrySink = NoopTelemetrySink;

/// Loads auction pages through a gateway and records telemetry.
pub struct AuctionIntake<'client, Gateway>
where
    Gateway: AuctionGateway + ?Sized,
{
    client: &'client Gateway,
    telemetry: &'client dyn TelemetrySink,
}

impl<'client, Gateway> AuctionIntake<'client, Gateway>
where
    Gateway: AuctionGateway + ?Sized,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            telemetry: &NOOP_TELEMETRY,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: &'client dyn TelemetrySink) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Performs the request described by `ticket`.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn fetch(&self, ticket: &FetchTicket) -> Result<AuctionPage, ClientError> {
        let started = Instant::now();
        let page = self.client.fetch_page(ticket.request()).await?;
        let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.telemetry.record(TelemetryEvent::SearchPageLoaded {
            page: ticket.request().page,
            item_count: page.items.len(),
            latency_ms,
        });
        Ok(page)
    }

    /// Issues a fetch for the state's current page and applies the result.
    ///
    /// When the page lies past the last page the state is clamped and the
    /// last page is fetched in its place. Gateway failures are stored in the state as its display error and
    /// also returned to the caller.
    ///
    /// # Errors
    ///
    /// Returns the URL composition error or the gateway error.
    pub async fn load(&self, state: &mut SearchState) -> Result<FetchOutcome, ClientError> {
        let outcome = self.load_current(state).await?;
        if outcome == FetchOutcome::Reclamped {
            return self.load_current(state).await;
        }
        Ok(outcome)
    }

    async fn load_current(&self, state: &mut SearchState) -> Result<FetchOutcome, ClientError> {
        let ticket = state.begin_fetch()?;
        match self.fetch(&ticket).await {
            Ok(page) => Ok(state.apply(&ticket, Ok(page))),
            Err(error) => {
                state.apply(&ticket, Err(error.clone()));
                Err(error)
            }
        }
    }
}
