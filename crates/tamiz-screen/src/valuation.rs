//! Valuation evaluator.
//!
//! Earnings-based scoring (PEG bands) when the company has positive
//! earnings; otherwise a single point is available for a price/sales
//! ratio that clears a fixed per-sector benchmark. Non-earning companies
//! are riskier, so the fallback path caps at one point.

use tamiz_traits::ValuationSnapshot;

/// A P/S ratio up to this multiple of the sector benchmark earns the
/// fallback point.
pub const PS_BENCHMARK_MULTIPLIER: f64 = 1.5;

/// Fixed per-sector price/sales benchmarks (GICS sector labels).
const SECTOR_PS_BENCHMARKS: &[(&str, f64)] = &[
    ("Information Technology", 6.26),
    ("Health Care", 1.85),
    ("Consumer Staples", 1.12),
    ("Financials", 2.23),
    ("Consumer Discretionary", 1.62),
    ("Energy", 0.85),
    ("Industrials", 1.60),
    ("Materials", 1.17),
    ("Communication Services", 3.24),
    ("Utilities", 0.41),
    ("Real Estate", 3.86),
];

/// Look up the price/sales benchmark for a GICS sector.
#[must_use]
pub fn sector_ps_benchmark(sector: &str) -> Option<f64> {
    SECTOR_PS_BENCHMARKS
        .iter()
        .find(|(name, _)| *name == sector)
        .map(|(_, benchmark)| *benchmark)
}

/// Score a valuation snapshot for a company in the given sector.
///
/// With a positive P/E: PEG < 1 scores 3, PEG < 2 scores 2, PEG < 3
/// scores 1, and PEG ≥ 3 or absent scores 0. Without a positive P/E the
/// fallback awards 1 when P/S is at most
/// [`PS_BENCHMARK_MULTIPLIER`] × the sector benchmark, and 0 otherwise,
/// including when the sector has no benchmark entry.
///
/// The function is total: any combination of inputs scores, none aborts.
#[must_use]
pub fn score_valuation(snapshot: &ValuationSnapshot, sector: &str) -> f64 {
    if let Some(pe) = snapshot.pe
        && pe > 0.0
    {
        return match snapshot.peg {
            Some(peg) if peg < 1.0 => 3.0,
            Some(peg) if peg < 2.0 => 2.0,
            Some(peg) if peg < 3.0 => 1.0,
            _ => 0.0,
        };
    }

    if let (Some(ps), Some(benchmark)) = (snapshot.ps, sector_ps_benchmark(sector))
        && ps <= PS_BENCHMARK_MULTIPLIER * benchmark
    {
        return 1.0;
    }
    0.0
}
