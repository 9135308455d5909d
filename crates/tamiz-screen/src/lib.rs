//! Ranking, scoring, and the screening pipeline for tamiz.
//!
//! This crate holds the decision-making core of the screener:
//!
//! 1. [`rank`]: concurrent market-cap lookups that select the top-N
//!    tickers of the universe.
//! 2. [`growth`], [`strength`], [`valuation`]: the three per-ticker
//!    evaluators and their fixed scoring policies.
//! 3. [`pipeline`]: the [`Screener`] orchestrator that fans a ticker out
//!    to the evaluators, skips tickers with incomplete data, and produces
//!    the final list sorted by total score.
//!
//! All scoring functions are pure; network access is confined to the
//! clients the pipeline is constructed with.

pub mod growth;
pub mod pipeline;
pub mod rank;
pub mod strength;
pub mod valuation;

pub use growth::{GrowthAssessment, score_growth};
pub use pipeline::Screener;
pub use rank::rank_by_market_cap;
pub use strength::{StrengthMetrics, score_strength};
pub use valuation::{score_valuation, sector_ps_benchmark};
