//! Gap analysis: raw score pairs to per-category average, gap and severity.
//!
//! Analysis never fails. A pair whose maximum is zero, negative or
//! non-finite, or whose obtained value is non-finite, contributes 0% so that a
//! half-filled form still produces a complete report.

use alp_core::analysis::{AnalysisReport, OutcomeAnalysis};
use alp_core::enums::{Category, Severity};
use alp_core::scores::{OutcomeAssessmentSet, ScorePair};

/// Target percentage every category is measured against.
pub const DEFAULT_TARGET: f64 = 60.0;

/// Largest gap still classified as [`Severity::Low`].
pub const LOW_GAP_LIMIT: f64 = 10.0;

/// Largest gap still classified as [`Severity::Medium`].
pub const MEDIUM_GAP_LIMIT: f64 = 25.0;

/// `obtained / maximum * 100`, or `0.0` when the pair cannot be scored.
#[must_use]
pub fn percentage(obtained: f64, maximum: f64) -> f64 {
    if !maximum.is_finite() || !obtained.is_finite() {
        tracing::warn!(obtained, maximum, "non-finite score, counting as 0%");
        return 0.0;
    }
    if maximum <= 0.0 {
        tracing::debug!(obtained, maximum, "no usable maximum, counting as 0%");
        return 0.0;
    }
    obtained / maximum * 100.0
}

/// [`percentage`] of a [`ScorePair`].
#[must_use]
pub fn pair_percentage(pair: ScorePair) -> f64 {
    percentage(pair.obtained, pair.maximum)
}

/// Severity tier for a gap. Upper bounds are inclusive, so a gap of exactly
/// 10 is `low` and exactly 25 is `medium`.
#[must_use]
pub fn classify(gap: f64) -> Severity {
    if gap.is_nan() || gap <= 0.0 {
        Severity::NoGap
    } else if gap <= LOW_GAP_LIMIT {
        Severity::Low
    } else if gap <= MEDIUM_GAP_LIMIT {
        Severity::Medium
    } else {
        Severity::High
    }
}

/// Analyze one category from its two period percentages.
///
/// The gap is taken from the unrounded average and rounded on its own; the
/// severity is classified from the rounded gap.
#[must_use]
pub fn analyze_percentages(first: f64, second: f64, target: f64) -> OutcomeAnalysis {
    let average = (first + second) / 2.0;
    let shortfall = target - average;
    let gap = if shortfall > 0.0 { round2(shortfall) } else { 0.0 };

    OutcomeAnalysis {
        average: round2(average),
        gap,
        severity: classify(gap),
    }
}

/// Analyze all three categories of an assessment set against `target`.
#[must_use]
pub fn analyze(set: &OutcomeAssessmentSet, target: f64) -> AnalysisReport {
    let category = |category: Category| {
        let [first, second] = set.pairs(category);
        let analysis =
            analyze_percentages(pair_percentage(first), pair_percentage(second), target);
        tracing::debug!(
            %category,
            average = analysis.average,
            gap = analysis.gap,
            severity = %analysis.severity,
            "analyzed category"
        );
        analysis
    };

    AnalysisReport {
        co1: category(Category::Co1),
        co2: category(Category::Co2),
        co3: category(Category::Co3),
    }
}

/// Categories whose severity calls for remediation, in category order.
#[must_use]
pub fn weak_categories(report: &AnalysisReport) -> Vec<Category> {
    report
        .iter()
        .filter(|(_, analysis)| analysis.severity.is_weak())
        .map(|(category, _)| category)
        .collect()
}

/// Round to 2 decimal places from the exact binary value, ties to even.
///
/// Matches decimal formatting, so `3.125` becomes `3.12` and `4.375` becomes
/// `4.38`. Scaling by 100 first would round the already-inexact product.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alp_core::scores::PeriodScores;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn uniform(first: ScorePair, second: ScorePair) -> OutcomeAssessmentSet {
        OutcomeAssessmentSet::new(
            PeriodScores::new(first, first, first),
            PeriodScores::new(second, second, second),
        )
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-25.0)]
    #[case::nan(f64::NAN)]
    #[case::infinity(f64::INFINITY)]
    #[case::negative_infinity(f64::NEG_INFINITY)]
    fn unusable_maximum_scores_zero(#[case] maximum: f64) {
        assert_eq!(percentage(20.0, maximum), 0.0);
    }

    #[test]
    fn non_finite_obtained_scores_zero() {
        assert_eq!(percentage(f64::NAN, 25.0), 0.0);
        assert_eq!(percentage(f64::INFINITY, 25.0), 0.0);
    }

    #[test]
    fn percentage_scales_to_hundred() {
        assert_eq!(percentage(25.0, 25.0), 100.0);
        assert_eq!(percentage(0.0, 25.0), 0.0);
        assert_eq!(percentage(10.0, 40.0), 25.0);
    }

    #[rstest]
    #[case::exact_zero(0.0, Severity::NoGap)]
    #[case::negative(-5.0, Severity::NoGap)]
    #[case::just_above_zero(0.01, Severity::Low)]
    #[case::low_limit(10.0, Severity::Low)]
    #[case::just_above_low(10.01, Severity::Medium)]
    #[case::medium_limit(25.0, Severity::Medium)]
    #[case::just_above_medium(25.01, Severity::High)]
    #[case::far_below(60.0, Severity::High)]
    fn classify_uses_inclusive_upper_bounds(#[case] gap: f64, #[case] expected: Severity) {
        assert_eq!(classify(gap), expected);
    }

    #[test]
    fn classify_treats_nan_as_no_gap() {
        assert_eq!(classify(f64::NAN), Severity::NoGap);
    }

    #[test]
    fn scenario_above_target_has_no_gap() {
        let set = uniform(ScorePair::new(20.0, 25.0), ScorePair::new(15.0, 25.0));
        let report = analyze(&set, DEFAULT_TARGET);

        assert_eq!(
            report.co1,
            OutcomeAnalysis {
                average: 70.0,
                gap: 0.0,
                severity: Severity::NoGap,
            }
        );
    }

    #[test]
    fn scenario_forty_percent_is_medium() {
        let set = uniform(ScorePair::new(10.0, 25.0), ScorePair::new(10.0, 25.0));
        let report = analyze(&set, DEFAULT_TARGET);

        assert_eq!(
            report.co2,
            OutcomeAnalysis {
                average: 40.0,
                gap: 20.0,
                severity: Severity::Medium,
            }
        );
    }

    #[test]
    fn scenario_zero_maximum_counts_as_zero() {
        let set = uniform(ScorePair::new(0.0, 0.0), ScorePair::new(20.0, 25.0));
        let report = analyze(&set, DEFAULT_TARGET);

        assert_eq!(
            report.co3,
            OutcomeAnalysis {
                average: 40.0,
                gap: 20.0,
                severity: Severity::Medium,
            }
        );
    }

    #[test]
    fn gap_of_exactly_ten_is_low() {
        let set = uniform(ScorePair::new(12.5, 25.0), ScorePair::new(12.5, 25.0));
        let analysis = analyze(&set, DEFAULT_TARGET).co1;
        assert_eq!(analysis.gap, 10.0);
        assert_eq!(analysis.severity, Severity::Low);
    }

    #[test]
    fn gap_of_exactly_twenty_five_is_medium() {
        let set = uniform(ScorePair::new(8.75, 25.0), ScorePair::new(8.75, 25.0));
        let analysis = analyze(&set, DEFAULT_TARGET).co1;
        assert_eq!(analysis.gap, 25.0);
        assert_eq!(analysis.severity, Severity::Medium);
    }

    #[test]
    fn gap_at_target_is_no_gap() {
        let analysis = analyze_percentages(60.0, 60.0, DEFAULT_TARGET);
        assert_eq!(analysis.gap, 0.0);
        assert_eq!(analysis.severity, Severity::NoGap);
    }

    #[test]
    fn average_and_gap_round_to_two_places() {
        let analysis = analyze_percentages(100.0 / 3.0, 50.0, DEFAULT_TARGET);
        assert_eq!(analysis.average, 41.67);
        assert_eq!(analysis.gap, 18.33);
        assert_eq!(analysis.severity, Severity::Medium);
    }

    #[rstest]
    #[case::half_below_even(0.125, 0.12)]
    #[case::half_above_odd(0.375, 0.38)]
    #[case::binary_below_half(1.005, 1.0)]
    #[case::plain(41.666_666, 41.67)]
    fn round2_ties_go_to_even(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round2(value), expected);
    }

    #[test]
    fn sixteenth_marks_round_ties_to_even() {
        let analysis = analyze_percentages(percentage(1.0, 16.0), percentage(0.0, 10.0), 60.0);
        assert_eq!((analysis.average, analysis.gap), (3.12, 56.88));

        let analysis = analyze_percentages(percentage(1.0, 16.0), percentage(1.0, 40.0), 60.0);
        assert_eq!((analysis.average, analysis.gap), (4.38, 55.62));
        assert_eq!(analysis.severity, Severity::High);
    }

    #[test]
    fn custom_target_shifts_gap() {
        let analysis = analyze_percentages(70.0, 70.0, 75.0);
        assert_eq!(analysis.gap, 5.0);
        assert_eq!(analysis.severity, Severity::Low);
    }

    #[test]
    fn surplus_never_yields_negative_gap() {
        let analysis = analyze_percentages(100.0, 100.0, DEFAULT_TARGET);
        assert_eq!(analysis.gap, 0.0);
        assert!(analysis.gap.is_sign_positive());
    }

    #[test]
    fn empty_set_is_high_everywhere() {
        let report = analyze(&OutcomeAssessmentSet::default(), DEFAULT_TARGET);
        for (_, analysis) in report.iter() {
            assert_eq!(analysis.average, 0.0);
            assert_eq!(analysis.gap, 60.0);
            assert_eq!(analysis.severity, Severity::High);
        }
    }

    #[test]
    fn weak_categories_skip_no_gap() {
        let set = OutcomeAssessmentSet::new(
            PeriodScores::new(
                ScorePair::new(20.0, 25.0),
                ScorePair::new(10.0, 25.0),
                ScorePair::new(14.0, 25.0),
            ),
            PeriodScores::new(
                ScorePair::new(15.0, 25.0),
                ScorePair::new(10.0, 25.0),
                ScorePair::new(14.0, 25.0),
            ),
        );
        let report = analyze(&set, DEFAULT_TARGET);
        assert_eq!(weak_categories(&report), vec![Category::Co2, Category::Co3]);
    }
}
