#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Core type and trait definitions for the tamiz stock screener.
//!
//! This crate provides the shared vocabulary of the screening pipeline:
//! the per-ticker data model ([`RevenueSeries`], [`ValuationSnapshot`],
//! [`ScoreRecord`]), the error taxonomy ([`ScreenError`]), and the
//! [`ResultSink`] seam through which a presentation layer consumes ranked
//! results and progress updates.

/// The version of the tamiz-traits crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Module declarations
pub mod error;
pub mod sink;
pub mod types;

// Re-exports
pub use error::{Result, ScreenError};
pub use sink::{NullSink, ResultSink};
pub use types::{RevenueSeries, ScoreRecord, SectorMap, Ticker, ValuationSnapshot, round2};
