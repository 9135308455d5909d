//! Error types for the Finviz scraper.

use thiserror::Error;

/// Errors that can occur when scraping Finviz.
#[derive(Debug, Error)]
pub enum FinvizError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Finviz returned a non-success status.
    #[error("Finviz request for {ticker} failed: HTTP {status}")]
    Http {
        /// Ticker the request was for.
        ticker: String,
        /// The HTTP status returned.
        status: reqwest::StatusCode,
    },

    /// The snapshot table was not found in the page.
    #[error("Could not find Finviz snapshot table for {0}")]
    MissingSnapshotTable(String),

    /// The snapshot parsed, but P/E, PEG, and the 5-year EPS growth
    /// estimate were all absent.
    #[error("No valuation data parsed from Finviz for {0}")]
    NoValuationData(String),
}
