//! FMP API client implementation.

use crate::{
    Result,
    error::FmpError,
    types::{CashFlowStatement, IncomeStatement, Quote, TtmRatios},
};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tamiz_traits::RevenueSeries;

/// Base URL for the FMP v3 API.
const FMP_BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Per-request timeout. A hanging upstream call must not stall a
/// screening run indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of additional attempts after a failed transport-level request.
const RETRY_BUDGET: usize = 2;

/// Financial Modeling Prep API client.
///
/// The API key is injected at construction; nothing reads it from ambient
/// global state after that.
#[derive(Debug, Clone)]
pub struct FmpClient {
    client: Client,
    api_key: String,
}

impl FmpClient {
    /// Create a new FMP client with the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Create a new FMP client from the `FMP_API_KEY` environment variable.
    ///
    /// This will also load from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set.
    pub fn from_env() -> Result<Self> {
        // Try to load .env file (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FMP_API_KEY").map_err(|_| FmpError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Build a URL with the API key.
    fn url(&self, endpoint: &str) -> String {
        if endpoint.contains('?') {
            format!("{FMP_BASE_URL}/{endpoint}&apikey={}", self.api_key)
        } else {
            format!("{FMP_BASE_URL}/{endpoint}?apikey={}", self.api_key)
        }
    }

    /// Make a GET request and parse the JSON response.
    ///
    /// Transport failures are retried with a small bounded budget; HTTP
    /// error statuses are not, since a 4xx/5xx rarely resolves on the
    /// next attempt.
    async fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = self.url(endpoint);

        let response = {
            let mut attempt = 0;
            loop {
                let result = self
                    .client
                    .get(&url)
                    .timeout(REQUEST_TIMEOUT)
                    .send()
                    .await;
                match result {
                    Ok(resp) => break resp,
                    Err(e) if attempt < RETRY_BUDGET => {
                        attempt += 1;
                        tracing::debug!(endpoint, attempt, error = %e, "retrying FMP request");
                        tokio::time::sleep(Duration::from_millis(200 * attempt as u64)).await;
                    }
                    Err(e) => return Err(FmpError::Request(e)),
                }
            }
        };

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FmpError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(FmpError::Api(format!("HTTP {status}: {text}")));
        }

        let text = response.text().await?;

        // FMP reports some errors in a 200 body
        if text.contains("\"Error Message\"") || text.contains("\"error\"") {
            return Err(FmpError::Api(text));
        }

        serde_json::from_str(&text).map_err(|e| {
            FmpError::Json(serde_json::Error::io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Failed to parse: {e}. Response: {text}"),
            )))
        })
    }

    /// Get annual income statements for a symbol, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn income_statements(
        &self,
        symbol: &str,
        limit: u32,
    ) -> Result<Vec<IncomeStatement>> {
        let endpoint = format!("income-statement/{}?limit={limit}", symbol.to_uppercase());
        self.get(&endpoint).await
    }

    /// Get up to five years of annual revenue as a [`RevenueSeries`].
    ///
    /// Statements without a revenue figure or a parseable fiscal year are
    /// skipped; the caller decides whether the surviving series holds
    /// enough distinct years to score.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn annual_revenue(&self, symbol: &str) -> Result<RevenueSeries> {
        let statements = self
            .income_statements(symbol, RevenueSeries::REQUIRED_YEARS as u32)
            .await?;

        let mut series = RevenueSeries::new();
        for stmt in &statements {
            if let (Some(year), Some(revenue)) = (stmt.fiscal_year(), stmt.revenue) {
                series.insert(year, revenue);
            }
        }
        Ok(series)
    }

    /// Get trailing-twelve-month ratios for a symbol.
    ///
    /// Returns `None` when FMP has no TTM ratio row for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn ratios_ttm(&self, symbol: &str) -> Result<Option<TtmRatios>> {
        let endpoint = format!("ratios-ttm/{}", symbol.to_uppercase());
        let rows: Vec<TtmRatios> = self.get(&endpoint).await?;
        Ok(rows.into_iter().next())
    }

    /// Get the most recent cash-flow statement for a symbol.
    ///
    /// Returns `None` when FMP has no cash-flow data for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn latest_cash_flow(&self, symbol: &str) -> Result<Option<CashFlowStatement>> {
        let endpoint = format!("cash-flow-statement/{}?limit=1", symbol.to_uppercase());
        let rows: Vec<CashFlowStatement> = self.get(&endpoint).await?;
        Ok(rows.into_iter().next())
    }

    /// Get the real-time quote for a symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn quote(&self, symbol: &str) -> Result<Option<Quote>> {
        let endpoint = format!("quote/{}", symbol.to_uppercase());
        let quotes: Vec<Quote> = self.get(&endpoint).await?;
        Ok(quotes.into_iter().next())
    }

    /// Get the market capitalization for a symbol, if the quote carries one.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    pub async fn market_cap(&self, symbol: &str) -> Result<Option<f64>> {
        Ok(self.quote(symbol).await?.and_then(|q| q.market_cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let client = FmpClient::new("test_key");
        assert_eq!(
            client.url("ratios-ttm/AAPL"),
            "https://financialmodelingprep.com/api/v3/ratios-ttm/AAPL?apikey=test_key"
        );
        assert_eq!(
            client.url("income-statement/AAPL?limit=5"),
            "https://financialmodelingprep.com/api/v3/income-statement/AAPL?limit=5&apikey=test_key"
        );
    }

    #[test]
    fn test_revenue_series_from_statements() {
        let statements: Vec<IncomeStatement> = serde_json::from_str(
            r#"[
                {"date": "2023-09-30", "symbol": "AAPL", "revenue": 383285000000},
                {"date": "2022-09-24", "symbol": "AAPL", "revenue": 394328000000},
                {"date": "2021-09-25", "symbol": "AAPL", "revenue": 365817000000},
                {"date": "2020-09-26", "symbol": "AAPL"},
                {"date": "2019-09-28", "symbol": "AAPL", "revenue": 260174000000}
            ]"#,
        )
        .unwrap();

        let mut series = RevenueSeries::new();
        for stmt in &statements {
            if let (Some(year), Some(revenue)) = (stmt.fiscal_year(), stmt.revenue) {
                series.insert(year, revenue);
            }
        }

        // The 2020 row has no revenue and is skipped
        assert_eq!(series.len(), 4);
        assert_eq!(series.years(), vec!["2019", "2021", "2022", "2023"]);
        assert!(!series.has_required_years());
    }
}
