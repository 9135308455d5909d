//! Finviz HTTP client.

use crate::{
    Result,
    error::FinvizError,
    parse::{parse_snapshot_fields, snapshot_from_fields},
};
use reqwest::Client;
use std::time::Duration;
use tamiz_traits::ValuationSnapshot;

/// Base URL for Finviz quote pages.
const FINVIZ_QUOTE_URL: &str = "https://finviz.com/quote.ashx";

/// Finviz serves an error page to clients without a browser user agent.
const USER_AGENT: &str = "Mozilla/5.0";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for scraping Finviz quote pages.
#[derive(Debug, Clone, Default)]
pub struct FinvizClient {
    client: Client,
}

impl FinvizClient {
    /// Create a new Finviz client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch and parse the valuation snapshot for a ticker.
    ///
    /// # Errors
    ///
    /// Returns an error if the page is unreachable, returns a non-success
    /// status, has no snapshot table, or if P/E, PEG, and the 5-year EPS
    /// growth estimate are all absent ([`FinvizError::NoValuationData`]).
    pub async fn snapshot(&self, ticker: &str) -> Result<ValuationSnapshot> {
        let response = self
            .client
            .get(FINVIZ_QUOTE_URL)
            .query(&[("t", ticker)])
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FinvizError::Http {
                ticker: ticker.to_string(),
                status: response.status(),
            });
        }

        let html = response.text().await?;
        let fields = parse_snapshot_fields(&html, ticker)?;
        let snapshot = snapshot_from_fields(ticker, &fields);

        if !snapshot.is_valid() {
            return Err(FinvizError::NoValuationData(ticker.to_string()));
        }

        tracing::debug!(
            ticker,
            pe = ?snapshot.pe,
            peg = ?snapshot.peg,
            ps = ?snapshot.ps,
            "parsed Finviz snapshot"
        );
        Ok(snapshot)
    }
}
