//! S&P 500 screening universe provider.
//!
//! Scrapes the constituents table of the Wikipedia "List of S&P 500
//! companies" page into a [`SectorMap`] (ticker → GICS sector). The map is
//! built once per screening run and is read-only thereafter.
//!
//! Unlike the per-ticker evaluators, a failure here is fatal to the run:
//! without a universe there is nothing to rank, so errors propagate
//! instead of being contained.

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tamiz_traits::SectorMap;
use thiserror::Error;

/// The reference table for S&P 500 constituents and their sectors.
const SP500_URL: &str = "https://en.wikipedia.org/wiki/List_of_S%26P_500_companies";

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Column index of the ticker symbol in the constituents table.
const SYMBOL_COLUMN: usize = 0;

/// Column index of the GICS sector in the constituents table.
const SECTOR_COLUMN: usize = 2;

/// Errors that can occur when fetching the screening universe.
#[derive(Debug, Error)]
pub enum UniverseError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The source returned a non-success status.
    #[error("Universe source returned HTTP {0}")]
    Http(reqwest::StatusCode),

    /// The constituents table was not found or yielded no rows. This
    /// usually means the page schema changed.
    #[error("Could not parse the S&P 500 constituents table")]
    MissingTable,
}

/// Result type for universe operations.
pub type Result<T> = std::result::Result<T, UniverseError>;

/// Client for retrieving the S&P 500 screening universe.
#[derive(Debug, Clone, Default)]
pub struct UniverseClient {
    client: Client,
}

impl UniverseClient {
    /// Create a new universe client.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch the full set of (ticker, sector) pairs for the S&P 500.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference table is unreachable or its
    /// schema is no longer recognizable. There is no retry.
    pub async fn sp500_constituents(&self) -> Result<SectorMap> {
        let response = self
            .client
            .get(SP500_URL)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(UniverseError::Http(response.status()));
        }

        let html = response.text().await?;
        let universe = parse_constituents(&html)?;
        tracing::debug!(tickers = universe.len(), "fetched screening universe");
        Ok(universe)
    }
}

/// Parse the constituents table out of the page HTML.
///
/// The table is identified by its `constituents` id; each row carries the
/// ticker symbol and the GICS sector in fixed columns. Rows too short to
/// hold both columns are skipped.
///
/// # Errors
///
/// Returns [`UniverseError::MissingTable`] when no usable rows are found.
pub fn parse_constituents(html: &str) -> Result<SectorMap> {
    let document = Html::parse_document(html);
    // Selectors are compile-time constants; parse cannot fail at runtime.
    let row_selector = Selector::parse("table#constituents tbody tr")
        .map_err(|_| UniverseError::MissingTable)?;
    let cell_selector = Selector::parse("td").map_err(|_| UniverseError::MissingTable)?;

    let mut universe = SectorMap::new();
    for row in document.select(&row_selector) {
        let cells: Vec<String> = row
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();

        if cells.len() <= SECTOR_COLUMN {
            continue; // header row or malformed row
        }

        let symbol = &cells[SYMBOL_COLUMN];
        let sector = &cells[SECTOR_COLUMN];
        if !symbol.is_empty() && !sector.is_empty() {
            universe.insert(symbol.clone(), sector.clone());
        }
    }

    if universe.is_empty() {
        return Err(UniverseError::MissingTable);
    }
    Ok(universe)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_PAGE: &str = r#"
        <html><body>
        <table id="constituents">
            <thead>
                <tr><th>Symbol</th><th>Security</th><th>GICS Sector</th></tr>
            </thead>
            <tbody>
                <tr>
                    <td><a href="/wiki/MMM">MMM</a></td>
                    <td>3M</td>
                    <td>Industrials</td>
                </tr>
                <tr>
                    <td><a href="/wiki/AAPL">AAPL</a></td>
                    <td>Apple Inc.</td>
                    <td>Information Technology</td>
                </tr>
                <tr>
                    <td><a href="/wiki/NEE">NEE</a></td>
                    <td>NextEra Energy</td>
                    <td>Utilities</td>
                </tr>
            </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn test_parse_constituents() {
        let universe = parse_constituents(SAMPLE_PAGE).unwrap();
        assert_eq!(universe.len(), 3);
        assert_eq!(
            universe.get("AAPL").map(String::as_str),
            Some("Information Technology")
        );
        assert_eq!(universe.get("NEE").map(String::as_str), Some("Utilities"));
    }

    #[test]
    fn test_parse_constituents_deterministic_order() {
        let universe = parse_constituents(SAMPLE_PAGE).unwrap();
        let tickers: Vec<&str> = universe.keys().map(String::as_str).collect();
        assert_eq!(tickers, vec!["AAPL", "MMM", "NEE"]);
    }

    #[test]
    fn test_parse_missing_table() {
        let err = parse_constituents("<html><body><p>moved</p></body></html>").unwrap_err();
        assert!(matches!(err, UniverseError::MissingTable));
    }

    #[test]
    fn test_parse_skips_short_rows() {
        let html = r#"
            <table id="constituents"><tbody>
                <tr><td>ONLY</td></tr>
                <tr><td>ABT</td><td>Abbott</td><td>Health Care</td></tr>
            </tbody></table>
        "#;
        let universe = parse_constituents(html).unwrap();
        assert_eq!(universe.len(), 1);
        assert!(universe.contains_key("ABT"));
    }
}
