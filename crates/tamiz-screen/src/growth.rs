//! Revenue growth evaluator.
//!
//! Growth is scored from five years of annual revenue. Absolute growth is
//! weighted over consistency: below the threshold a company scores
//! nothing, however smooth its trajectory.

use tamiz_traits::RevenueSeries;

/// Total 5-year growth below or at this percentage scores 0.0 outright.
pub const GROWTH_THRESHOLD_PCT: f64 = 50.0;

/// Points for clearing the growth threshold.
const BASE_SCORE: f64 = 1.5;

/// Additional points when revenue never declines year-over-year.
const CONSISTENCY_BONUS: f64 = 1.5;

/// Outcome of the growth evaluation for one ticker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthAssessment {
    /// Growth sub-score: 0.0, 1.5, or 3.0.
    pub score: f64,
    /// Total growth from earliest to latest year, percent, 2 decimals.
    pub growth_pct: f64,
}

/// Score a revenue series.
///
/// Returns `None` when the series holds fewer than
/// [`RevenueSeries::REQUIRED_YEARS`] distinct years (or a non-positive
/// base year); such a ticker is invalid for this evaluator and is dropped
/// from the run, which is different from scoring 0.0.
#[must_use]
pub fn score_growth(series: &RevenueSeries) -> Option<GrowthAssessment> {
    if !series.has_required_years() {
        return None;
    }
    let growth_pct = series.growth_percent()?;

    if growth_pct <= GROWTH_THRESHOLD_PCT {
        return Some(GrowthAssessment {
            score: 0.0,
            growth_pct,
        });
    }

    let mut score = BASE_SCORE;
    if series.is_non_decreasing() {
        score += CONSISTENCY_BONUS;
    }
    Some(GrowthAssessment { score, growth_pct })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> RevenueSeries {
        let mut s = RevenueSeries::new();
        for (i, v) in values.iter().enumerate() {
            s.insert(format!("{}", 2019 + i), *v);
        }
        s
    }

    #[test]
    fn test_too_few_years_is_invalid() {
        assert_eq!(score_growth(&series(&[100.0, 150.0, 200.0, 250.0])), None);
        assert_eq!(score_growth(&RevenueSeries::new()), None);
    }

    #[test]
    fn test_low_growth_scores_zero_even_when_consistent() {
        let a = score_growth(&series(&[100.0, 110.0, 120.0, 130.0, 140.0])).unwrap();
        assert_relative_eq!(a.score, 0.0);
        assert_relative_eq!(a.growth_pct, 40.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 50% still scores zero
        let a = score_growth(&series(&[100.0, 110.0, 120.0, 130.0, 150.0])).unwrap();
        assert_relative_eq!(a.score, 0.0);
        assert_relative_eq!(a.growth_pct, 50.0);
    }

    #[test]
    fn test_high_consistent_growth_scores_three() {
        let a = score_growth(&series(&[100.0, 120.0, 140.0, 160.0, 180.0])).unwrap();
        assert_relative_eq!(a.score, 3.0);
        assert_relative_eq!(a.growth_pct, 80.0);
    }

    #[test]
    fn test_high_inconsistent_growth_scores_base_only() {
        // One down year inside an otherwise strong run
        let a = score_growth(&series(&[100.0, 130.0, 120.0, 160.0, 180.0])).unwrap();
        assert_relative_eq!(a.score, 1.5);
        assert_relative_eq!(a.growth_pct, 80.0);
    }

    #[test]
    fn test_flat_years_keep_consistency() {
        let a = score_growth(&series(&[100.0, 120.0, 120.0, 160.0, 180.0])).unwrap();
        assert_relative_eq!(a.score, 3.0);
    }

    #[test]
    fn test_growth_pct_rounded_to_two_decimals() {
        let a = score_growth(&series(&[3.0, 3.2, 3.5, 3.8, 4.0])).unwrap();
        assert_relative_eq!(a.growth_pct, 33.33);
    }
}
