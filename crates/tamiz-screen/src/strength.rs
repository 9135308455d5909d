//! Financial-strength evaluator.
//!
//! Four pass/fail balance-sheet checks: leverage, cash generation, and two
//! liquidity ratios. A ticker missing any of the four inputs is invalid
//! for this evaluator, which is distinct from scoring zero.

use tamiz_fmp::{CashFlowStatement, TtmRatios};
use tamiz_traits::round2;

/// The four inputs to strength scoring, rounded to two decimals.
///
/// Rounding happens once, on construction, so the threshold comparisons
/// and the displayed values share the same basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrengthMetrics {
    /// Debt-to-equity ratio (TTM).
    pub debt_to_equity: f64,
    /// Most recent free cash flow.
    pub free_cash_flow: f64,
    /// Current ratio (TTM).
    pub current_ratio: f64,
    /// Quick ratio (TTM).
    pub quick_ratio: f64,
}

impl StrengthMetrics {
    /// Combine the TTM ratio row and the latest cash-flow statement.
    ///
    /// Returns `None` when any of the four fields is absent.
    #[must_use]
    pub fn from_sources(ratios: &TtmRatios, cash_flow: &CashFlowStatement) -> Option<Self> {
        Some(Self {
            debt_to_equity: round2(ratios.debt_to_equity?),
            free_cash_flow: round2(cash_flow.free_cash_flow?),
            current_ratio: round2(ratios.current_ratio?),
            quick_ratio: round2(ratios.quick_ratio?),
        })
    }
}

/// Score financial strength: one point per satisfied threshold.
///
/// +1 for debt/equity < 1, +1 for positive free cash flow, +1 for a
/// current ratio of at least 1.2, +1 for a quick ratio of at least 1.
/// Integer-valued in [0, 4].
#[must_use]
pub fn score_strength(metrics: &StrengthMetrics) -> f64 {
    let mut score = 0.0;
    if metrics.debt_to_equity < 1.0 {
        score += 1.0;
    }
    if metrics.free_cash_flow > 0.0 {
        score += 1.0;
    }
    if metrics.current_ratio >= 1.2 {
        score += 1.0;
    }
    if metrics.quick_ratio >= 1.0 {
        score += 1.0;
    }
    score
}
