//! Financial Modeling Prep (FMP) API client for tamiz.
//!
//! This crate provides a client for fetching the fundamental data the
//! screener needs from the [Financial Modeling Prep](https://financialmodelingprep.com/)
//! API: annual revenue history, trailing-twelve-month ratios, the most
//! recent free cash flow, and quote data (market capitalization).
//!
//! # Usage
//!
//! ```rust,ignore
//! use tamiz_fmp::FmpClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FmpClient::from_env()?;
//!
//!     // Five years of annual revenue, keyed by fiscal year
//!     let revenue = client.annual_revenue("AAPL").await?;
//!
//!     // TTM ratios and latest free cash flow
//!     let ratios = client.ratios_ttm("AAPL").await?;
//!     let cash = client.latest_cash_flow("AAPL").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! Set `FMP_API_KEY` in your environment or `.env` file:
//!
//! ```bash
//! FMP_API_KEY=your_api_key_here
//! ```

mod client;
mod error;
mod types;

pub use client::FmpClient;
pub use error::FmpError;
pub use types::*;

/// Result type for FMP operations.
pub type Result<T> = std::result::Result<T, FmpError>;
