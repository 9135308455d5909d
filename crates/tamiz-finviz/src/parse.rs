//! Snapshot-table parsing.
//!
//! The Finviz quote page carries its key statistics in a table with class
//! `snapshot-table2`, laid out as repeating label/value `<td>` pairs.

use crate::{Result, error::FinvizError};
use scraper::{Html, Selector};
use std::collections::BTreeMap;
use tamiz_traits::ValuationSnapshot;

/// Parse a numeric cell, stripping currency symbols and thousands commas.
///
/// `"1,234.5"` and `"$1,234.5"` both parse to `1234.5`; `"-"` and other
/// non-numeric placeholders yield `None`.
#[must_use]
pub fn parse_num(value: &str) -> Option<f64> {
    value.replace([',', '$'], "").parse().ok()
}

/// Parse a percentage cell to its numeric magnitude.
///
/// `"12.30%"` parses to `12.3`. Values without a trailing `%` yield
/// `None`; a percentage field carrying a bare number is not trusted.
#[must_use]
pub fn parse_pct(value: &str) -> Option<f64> {
    value.strip_suffix('%')?.parse().ok()
}

/// Extract the label/value pairs of the snapshot table.
///
/// # Errors
///
/// Returns [`FinvizError::MissingSnapshotTable`] when the page has no
/// recognizable snapshot table (layout change, block page, bad ticker).
pub fn parse_snapshot_fields(html: &str, ticker: &str) -> Result<BTreeMap<String, String>> {
    let document = Html::parse_document(html);
    // Selector is a compile-time constant; parse cannot fail at runtime.
    let selector = Selector::parse("table.snapshot-table2 td")
        .map_err(|_| FinvizError::MissingSnapshotTable(ticker.to_string()))?;

    let cells: Vec<String> = document
        .select(&selector)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect();

    if cells.is_empty() {
        return Err(FinvizError::MissingSnapshotTable(ticker.to_string()));
    }

    // The cells alternate label, value, label, value, ...
    let mut fields = BTreeMap::new();
    for pair in cells.chunks_exact(2) {
        fields.insert(pair[0].clone(), pair[1].clone());
    }
    Ok(fields)
}

/// Build a [`ValuationSnapshot`] from parsed snapshot fields.
#[must_use]
pub fn snapshot_from_fields(
    ticker: &str,
    fields: &BTreeMap<String, String>,
) -> ValuationSnapshot {
    let get = |label: &str| fields.get(label).map(String::as_str);

    ValuationSnapshot {
        ticker: ticker.to_string(),
        ps: get("P/S").and_then(parse_num),
        pe: get("P/E").and_then(parse_num),
        peg: get("PEG").and_then(parse_num),
        eps_next_5y: get("EPS next 5Y").and_then(parse_pct),
    }
}
