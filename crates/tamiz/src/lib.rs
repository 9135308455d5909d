#![doc(issue_tracker_base_url = "https://github.com/factordynamics/tamiz/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # tamiz
//!
//! Fundamental stock screener for S&P 500 constituents.
//!
//! tamiz is an umbrella crate that re-exports all tamiz sub-crates for
//! convenience. It scores the largest S&P 500 companies on three
//! fundamental dimensions (revenue growth, financial strength, and
//! valuation) and produces a composite ranking.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tamiz::fmp::FmpClient;
//! use tamiz::finviz::FinvizClient;
//! use tamiz::universe::UniverseClient;
//! use tamiz::{NullSink, Screener};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let universe = UniverseClient::new().sp500_constituents().await?;
//!     let screener = Screener::new(FmpClient::from_env()?, FinvizClient::new());
//!
//!     let cancel = CancellationToken::new();
//!     let records = screener.run(&universe, 20, &NullSink, &cancel).await?;
//!
//!     for record in &records {
//!         println!("{}: {:.1}", record.ticker, record.total_score);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Organization
//!
//! - [`traits`] - Core types, errors, and the [`ResultSink`] seam
//! - [`fmp`] - Financial Modeling Prep API client (fundamentals, quotes)
//! - [`finviz`] - Finviz valuation snapshot client
//! - [`universe`] - S&P 500 constituent list with sector labels
//! - [`screen`] - Ranking, the three evaluators, and the pipeline
//!
//! ## Architecture
//!
//! A screening run proceeds in two phases:
//!
//! 1. **Ranking** fetches market caps concurrently and keeps the top N
//! 2. **Evaluation** scores each survivor sequentially on growth,
//!    strength, and valuation; any invalid evaluator drops the ticker
//!
//! Results flow to a [`ResultSink`], which decouples the pipeline from
//! its presentation (console table, JSON, or anything else).

/// Version information for the tamiz crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core types and the sink seam.
///
/// Re-exports [`tamiz_traits`]: the [`ScoreRecord`] output type, the
/// [`ResultSink`] trait, revenue and valuation value types, and the
/// shared error enum.
pub mod traits {
    pub use tamiz_traits::*;
}

// Re-export the pipeline entry points at top level
pub use tamiz_screen::Screener;
pub use tamiz_traits::{NullSink, ResultSink, ScoreRecord};

// Re-export error types
pub use tamiz_traits::{Result, ScreenError};

/// Financial Modeling Prep (FMP) API client.
///
/// Fundamental financial data: annual revenue, TTM ratios, cash-flow
/// statements, and quotes. Requires an API key; set the `FMP_API_KEY`
/// environment variable or add it to a `.env` file and use
/// [`fmp::FmpClient::from_env`].
pub mod fmp {
    pub use tamiz_fmp::*;
}

/// Finviz valuation snapshot client.
///
/// Scrapes the per-ticker snapshot table for P/S, P/E, PEG, and the
/// 5-year EPS estimate.
pub mod finviz {
    pub use tamiz_finviz::*;
}

/// S&P 500 universe.
///
/// Fetches the constituent list, with GICS sector labels, from the
/// Wikipedia constituents table.
pub mod universe {
    pub use tamiz_universe::*;
}

/// Ranking, evaluators, and the screening pipeline.
///
/// - [`screen::rank_by_market_cap`] - concurrent top-N ranking
/// - [`screen::score_growth`], [`screen::score_strength`],
///   [`screen::score_valuation`] - the three evaluators
/// - [`screen::Screener`] - end-to-end orchestration
pub mod screen {
    pub use tamiz_screen::*;
}

/// Prelude module for convenient imports.
///
/// ```ignore
/// use tamiz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::traits::*;
    pub use crate::{Result, ScreenError, Screener};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_re_exports() {
        fn _accept_sink(_sink: &dyn ResultSink) {}

        let _result: Result<()> = Ok(());
        let _error: ScreenError = ScreenError::Cancelled;
    }
}
