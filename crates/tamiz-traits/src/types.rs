//! Common types for the tamiz screener.
//!
//! These types form the data model that flows through the pipeline:
//! a [`SectorMap`] describes the screening universe, a [`RevenueSeries`]
//! and [`ValuationSnapshot`] carry per-ticker evaluator inputs, and a
//! [`ScoreRecord`] is the immutable per-ticker output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A stock ticker symbol, e.g. "AAPL" or "MSFT".
///
/// The ticker is the primary key across all lookups in a screening run.
pub type Ticker = String;

/// Mapping from ticker to GICS sector label.
///
/// Built once per screening run from the universe source and read-only
/// thereafter. A `BTreeMap` keeps iteration order deterministic.
pub type SectorMap = BTreeMap<Ticker, String>;

/// Round a value to two decimal places.
///
/// Used throughout the scoring pipeline so that threshold comparisons and
/// displayed values share the same basis.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Annual revenue history for one company, keyed by fiscal year.
///
/// Years are 4-digit strings; the underlying `BTreeMap` keeps them in
/// ascending order, which is the order growth computation requires.
/// A series is usable for growth scoring only when it holds
/// [`RevenueSeries::REQUIRED_YEARS`] distinct years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    revenues: BTreeMap<String, f64>,
}

impl RevenueSeries {
    /// Number of distinct fiscal years required for a valid series.
    pub const REQUIRED_YEARS: usize = 5;

    /// Create an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            revenues: BTreeMap::new(),
        }
    }

    /// Insert a (fiscal year, revenue) observation.
    ///
    /// A second observation for the same year replaces the first.
    pub fn insert(&mut self, year: impl Into<String>, revenue: f64) {
        self.revenues.insert(year.into(), revenue);
    }

    /// Number of distinct fiscal years in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.revenues.len()
    }

    /// Whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty()
    }

    /// Whether the series holds enough distinct years for growth scoring.
    #[must_use]
    pub fn has_required_years(&self) -> bool {
        self.len() >= Self::REQUIRED_YEARS
    }

    /// Revenue values in ascending year order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.revenues.values().copied().collect()
    }

    /// Fiscal years in ascending order.
    #[must_use]
    pub fn years(&self) -> Vec<&str> {
        self.revenues.keys().map(String::as_str).collect()
    }

    /// Total growth from the earliest to the latest year, in percent,
    /// rounded to two decimals. `None` for series with fewer than two
    /// points or a non-positive base year.
    #[must_use]
    pub fn growth_percent(&self) -> Option<f64> {
        let values = self.values();
        let (first, last) = (values.first()?, values.last()?);
        if values.len() < 2 || *first <= 0.0 {
            return None;
        }
        Some(round2((last - first) / first * 100.0))
    }

    /// Whether revenue never declines year-over-year across the series.
    ///
    /// Flat years count as consistent; any decline breaks it.
    #[must_use]
    pub fn is_non_decreasing(&self) -> bool {
        self.values().windows(2).all(|w| w[1] >= w[0])
    }
}

/// Valuation multiples scraped for one ticker.
///
/// Each field is independently nullable; a source that omits or mangles a
/// value yields `None` rather than failing the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSnapshot {
    /// Ticker the snapshot belongs to.
    pub ticker: Ticker,
    /// Price-to-sales ratio.
    pub ps: Option<f64>,
    /// Price-to-earnings ratio.
    pub pe: Option<f64>,
    /// Price/earnings-to-growth ratio.
    pub peg: Option<f64>,
    /// Estimated EPS growth over the next 5 years, in percent.
    pub eps_next_5y: Option<f64>,
}

impl ValuationSnapshot {
    /// Whether the snapshot carries enough signal to score.
    ///
    /// P/S alone is insufficient: a snapshot with P/E, PEG, and the 5-year
    /// EPS estimate all absent is invalid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.pe.is_some() || self.peg.is_some() || self.eps_next_5y.is_some()
    }
}

/// The final per-ticker output of a screening run.
///
/// Holds the identifying fields, the raw metrics that fed the scoring, the
/// three sub-scores, and their sum. Constructed once by the aggregator and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Ticker symbol.
    pub ticker: Ticker,
    /// GICS sector label.
    pub sector: String,
    /// 5-year revenue growth in percent, rounded to two decimals.
    pub growth_pct: f64,
    /// Debt-to-equity ratio (TTM), rounded.
    pub debt_to_equity: f64,
    /// Most recent free cash flow, rounded.
    pub free_cash_flow: f64,
    /// Current ratio (TTM), rounded.
    pub current_ratio: f64,
    /// Quick ratio (TTM), rounded.
    pub quick_ratio: f64,
    /// Price-to-earnings ratio, if available.
    pub pe: Option<f64>,
    /// Price/earnings-to-growth ratio, if available.
    pub peg: Option<f64>,
    /// Price-to-sales ratio, if available.
    pub ps: Option<f64>,
    /// Growth sub-score, one of 0.0 / 1.5 / 3.0.
    pub growth_score: f64,
    /// Financial-strength sub-score, integer-valued in [0, 4].
    pub strength_score: f64,
    /// Valuation sub-score, integer-valued in [0, 3].
    pub valuation_score: f64,
    /// Sum of the three sub-scores, in [0, 10].
    pub total_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[(&str, f64)]) -> RevenueSeries {
        let mut s = RevenueSeries::new();
        for (year, rev) in values {
            s.insert(*year, *rev);
        }
        s
    }

    #[test]
    fn test_round2() {
        assert_relative_eq!(round2(2.346), 2.35);
        assert_relative_eq!(round2(-2.344), -2.34);
        assert_relative_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_revenue_series_ordering() {
        let s = series(&[("2023", 300.0), ("2019", 100.0), ("2021", 200.0)]);
        assert_eq!(s.years(), vec!["2019", "2021", "2023"]);
        assert_eq!(s.values(), vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_revenue_series_required_years() {
        let mut s = series(&[
            ("2019", 1.0),
            ("2020", 2.0),
            ("2021", 3.0),
            ("2022", 4.0),
        ]);
        assert!(!s.has_required_years());
        s.insert("2023", 5.0);
        assert!(s.has_required_years());
        // Duplicate year does not add a distinct point
        s.insert("2023", 6.0);
        assert_eq!(s.len(), RevenueSeries::REQUIRED_YEARS);
    }

    #[test]
    fn test_growth_percent() {
        let s = series(&[
            ("2019", 100.0),
            ("2020", 120.0),
            ("2021", 150.0),
            ("2022", 170.0),
            ("2023", 180.0),
        ]);
        assert_relative_eq!(s.growth_percent().unwrap(), 80.0);
    }

    #[test]
    fn test_growth_percent_rounding() {
        let s = series(&[("2022", 3.0), ("2023", 4.0)]);
        // (4 - 3) / 3 * 100 = 33.333... -> 33.33
        assert_relative_eq!(s.growth_percent().unwrap(), 33.33);
    }

    #[test]
    fn test_growth_percent_insufficient() {
        assert_eq!(RevenueSeries::new().growth_percent(), None);
        assert_eq!(series(&[("2023", 100.0)]).growth_percent(), None);
    }

    #[test]
    fn test_consistency() {
        let up = series(&[("2019", 1.0), ("2020", 2.0), ("2021", 2.0), ("2022", 3.0)]);
        assert!(up.is_non_decreasing());

        let dip = series(&[("2019", 1.0), ("2020", 3.0), ("2021", 2.0), ("2022", 4.0)]);
        assert!(!dip.is_non_decreasing());
    }

    #[test]
    fn test_snapshot_validity() {
        let valid = ValuationSnapshot {
            ticker: "AAPL".to_string(),
            ps: None,
            pe: Some(28.3),
            peg: None,
            eps_next_5y: None,
        };
        assert!(valid.is_valid());

        // P/S alone does not validate a snapshot
        let invalid = ValuationSnapshot {
            ticker: "XYZ".to_string(),
            ps: Some(1.2),
            pe: None,
            peg: None,
            eps_next_5y: None,
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_score_record_serializes() {
        let record = ScoreRecord {
            ticker: "MSFT".to_string(),
            sector: "Information Technology".to_string(),
            growth_pct: 62.5,
            debt_to_equity: 0.45,
            free_cash_flow: 65_000_000_000.0,
            current_ratio: 1.66,
            quick_ratio: 1.54,
            pe: Some(35.1),
            peg: Some(2.1),
            ps: Some(12.3),
            growth_score: 3.0,
            strength_score: 4.0,
            valuation_score: 1.0,
            total_score: 8.0,
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: ScoreRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
