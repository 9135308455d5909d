//! Finviz valuation snapshot scraper for tamiz.
//!
//! Finviz publishes valuation multiples (P/S, P/E, PEG, EPS growth
//! estimates) in a label/value snapshot table on each quote page. This
//! crate fetches that page and parses it into a
//! [`tamiz_traits::ValuationSnapshot`]. No API key is required.
//!
//! Parsing is deliberately lenient: an unparsable cell becomes `None`, not
//! an error. A snapshot only fails outright when the page is unreachable,
//! the table is missing, or every earnings-based signal (P/E, PEG, EPS
//! next 5Y) is absent.

mod client;
mod error;
mod parse;

pub use client::FinvizClient;
pub use error::FinvizError;
pub use parse::{parse_num, parse_pct, parse_snapshot_fields, snapshot_from_fields};

/// Result type for Finviz operations.
pub type Result<T> = std::result::Result<T, FinvizError>;
