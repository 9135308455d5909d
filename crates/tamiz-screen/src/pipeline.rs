//! The screening pipeline.
//!
//! [`Screener::run`] drives a whole screening run: rank the universe by
//! market cap, evaluate each of the top-N tickers against the three
//! evaluators in turn, and deliver the surviving records, sorted by total
//! score, to a [`ResultSink`].
//!
//! A ticker appears in the output only when all three evaluators returned
//! valid data; there are no partial records. Per-ticker evaluation is
//! sequential: a ticker that fails growth is skipped before any further
//! network calls are made for it. Only the ranking phase is concurrent.

use crate::growth::{GrowthAssessment, score_growth};
use crate::rank::rank_by_market_cap;
use crate::strength::{StrengthMetrics, score_strength};
use crate::valuation::score_valuation;
use std::cmp::Ordering;
use tamiz_finviz::FinvizClient;
use tamiz_fmp::FmpClient;
use tamiz_traits::{
    ResultSink, Result, ScoreRecord, ScreenError, SectorMap, ValuationSnapshot, round2,
};
use tokio_util::sync::CancellationToken;

/// Sector label used when a ranked ticker is missing from the universe map.
const UNKNOWN_SECTOR: &str = "Unknown";

/// Orchestrates a screening run against the configured data sources.
#[derive(Debug, Clone)]
pub struct Screener {
    fmp: FmpClient,
    finviz: FinvizClient,
}

impl Screener {
    /// Create a screener over the given data-source clients.
    #[must_use]
    pub const fn new(fmp: FmpClient, finviz: FinvizClient) -> Self {
        Self { fmp, finviz }
    }

    /// Run a full screening pass over the top `top_n` tickers of
    /// `universe` by market capitalization.
    ///
    /// The sink receives one progress tick per ticker processed (skipped
    /// tickers included) and a single delivery of the final list, sorted
    /// by total score descending. The same list is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenError::InvalidInput`] for a zero `top_n` and
    /// [`ScreenError::Cancelled`] when the token fires mid-run.
    /// Per-ticker data failures never error; those tickers are skipped.
    pub async fn run(
        &self,
        universe: &SectorMap,
        top_n: usize,
        sink: &dyn ResultSink,
        cancel: &CancellationToken,
    ) -> Result<Vec<ScoreRecord>> {
        if top_n == 0 {
            return Err(ScreenError::InvalidInput(
                "number of companies to screen must be positive".to_string(),
            ));
        }

        let tickers: Vec<_> = universe.keys().cloned().collect();
        tracing::info!(universe = tickers.len(), top_n, "ranking by market cap");
        let top = rank_by_market_cap(&self.fmp, &tickers, top_n, cancel).await;

        if cancel.is_cancelled() {
            return Err(ScreenError::Cancelled);
        }

        let total = top.len();
        let mut records = Vec::new();

        for (i, ticker) in top.iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(ScreenError::Cancelled);
            }

            let sector = universe
                .get(ticker)
                .map_or(UNKNOWN_SECTOR, String::as_str);

            if let Some(record) = self.evaluate_ticker(ticker, sector).await {
                records.push(record);
            }
            sink.progress(i + 1, total);
        }

        sort_by_total_score(&mut records);
        sink.results(&records);
        Ok(records)
    }

    /// Evaluate one ticker against all three evaluators.
    ///
    /// Fetching stays sequential: a ticker whose growth data is already
    /// invalid triggers no further network calls. The skip decision
    /// itself lives in [`record_from_parts`].
    async fn evaluate_ticker(&self, ticker: &str, sector: &str) -> Option<ScoreRecord> {
        tracing::debug!(ticker, sector, "evaluating");

        let growth = self.fetch_growth(ticker).await;
        let strength = if growth.is_some() {
            self.fetch_strength(ticker).await
        } else {
            None
        };
        let snapshot = if strength.is_some() {
            self.fetch_valuation(ticker).await
        } else {
            None
        };

        record_from_parts(ticker, sector, growth, strength, snapshot.as_ref())
    }

    async fn fetch_growth(&self, ticker: &str) -> Option<GrowthAssessment> {
        match self.fmp.annual_revenue(ticker).await {
            Ok(series) => {
                let growth = score_growth(&series);
                if growth.is_none() {
                    tracing::warn!(ticker, years = series.len(), "not enough revenue data");
                }
                growth
            }
            Err(e) => {
                tracing::warn!(ticker, error = %e, "revenue fetch failed");
                None
            }
        }
    }

    async fn fetch_strength(&self, ticker: &str) -> Option<StrengthMetrics> {
        let ratios = match self.fmp.ratios_ttm(ticker).await {
            Ok(Some(ratios)) => ratios,
            Ok(None) => {
                tracing::warn!(ticker, "no TTM ratio data");
                return None;
            }
            Err(e) => {
                tracing::warn!(ticker, error = %e, "TTM ratio fetch failed");
                return None;
            }
        };
        let cash_flow = match self.fmp.latest_cash_flow(ticker).await {
            Ok(Some(cash_flow)) => cash_flow,
            Ok(None) => {
                tracing::warn!(ticker, "no cash flow data");
                return None;
            }
            Err(e) => {
                tracing::warn!(ticker, error = %e, "cash flow fetch failed");
                return None;
            }
        };
        let metrics = StrengthMetrics::from_sources(&ratios, &cash_flow);
        if metrics.is_none() {
            tracing::warn!(ticker, "incomplete financial data");
        }
        metrics
    }

    async fn fetch_valuation(&self, ticker: &str) -> Option<ValuationSnapshot> {
        match self.finviz.snapshot(ticker).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(ticker, error = %e, "valuation fetch failed");
                None
            }
        }
    }
}

/// Assemble the immutable per-ticker record from the evaluator outputs.
///
/// A ticker that failed any one of the three evaluators yields `None`
/// and is absent from the run's output; there are no partial records.
/// When all three are present the total is the exact sum of the three
/// sub-scores.
fn record_from_parts(
    ticker: &str,
    sector: &str,
    growth: Option<GrowthAssessment>,
    strength: Option<StrengthMetrics>,
    snapshot: Option<&ValuationSnapshot>,
) -> Option<ScoreRecord> {
    let growth = growth?;
    let strength = strength?;
    let snapshot = snapshot?;

    let strength_score = score_strength(&strength);
    let valuation_score = score_valuation(snapshot, sector);
    let total_score = round2(growth.score + strength_score + valuation_score);

    Some(ScoreRecord {
        ticker: ticker.to_string(),
        sector: sector.to_string(),
        growth_pct: growth.growth_pct,
        debt_to_equity: strength.debt_to_equity,
        free_cash_flow: strength.free_cash_flow,
        current_ratio: strength.current_ratio,
        quick_ratio: strength.quick_ratio,
        pe: snapshot.pe,
        peg: snapshot.peg,
        ps: snapshot.ps,
        growth_score: growth.score,
        strength_score,
        valuation_score,
        total_score,
    })
}

/// Sort records by total score descending, ticker ascending on ties.
///
/// The tie-break is not required by the scoring rules but keeps the table
/// stable across runs.
fn sort_by_total_score(records: &mut [ScoreRecord]) {
    records.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.ticker.cmp(&b.ticker))
    });
}
