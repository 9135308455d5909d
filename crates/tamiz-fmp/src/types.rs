//! Data types for FMP API responses.
//!
//! Fields the screener treats as "invalid when absent" deserialize to
//! `Option<f64>` rather than a defaulted zero: a missing ratio must drop
//! the ticker, not score as 0.0.

use serde::{Deserialize, Serialize};

/// One annual income statement row, reduced to what growth scoring needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Filing date (YYYY-MM-DD).
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Total revenue for the period.
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl IncomeStatement {
    /// Fiscal year, taken as the first four characters of the filing date.
    #[must_use]
    pub fn fiscal_year(&self) -> Option<&str> {
        (self.date.len() >= 4).then(|| &self.date[..4])
    }
}

/// Trailing-twelve-month ratios from the `ratios-ttm` endpoint.
///
/// FMP spells the TTM suffix in caps, which `rename_all` cannot produce,
/// so the field names are mapped explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtmRatios {
    /// Debt-to-equity ratio.
    #[serde(rename = "debtEquityRatioTTM", default)]
    pub debt_to_equity: Option<f64>,
    /// Current ratio.
    #[serde(rename = "currentRatioTTM", default)]
    pub current_ratio: Option<f64>,
    /// Quick ratio.
    #[serde(rename = "quickRatioTTM", default)]
    pub quick_ratio: Option<f64>,
}

/// One cash-flow statement row, reduced to what strength scoring needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// Filing date (YYYY-MM-DD).
    pub date: String,
    /// Ticker symbol.
    #[serde(default)]
    pub symbol: String,
    /// Free cash flow for the period.
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
}

/// Real-time quote data from FMP.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol.
    pub symbol: String,
    /// Current price.
    #[serde(default)]
    pub price: Option<f64>,
    /// Market capitalization.
    #[serde(default)]
    pub market_cap: Option<f64>,
}
