use crate::analysis::rounding::{round1, round0};
use crate::models::metrics::{MetricDelta, MetricsSnapshot, ReEvaluationResult, ReEvaluationSummary};

/// Each completed milestone adds roughly 15% improvement.
pub const FACTOR_PER_MILESTONE: f64 = 0.15;

const VISIBILITY_POINTS_PER_FACTOR: f64 = 10.0;
const CONVERSION_PERCENT_PER_FACTOR: f64 = 0.5;
const RATING_PER_FACTOR: f64 = 0.2;
const REVENUE_GROWTH_PER_FACTOR: f64 = 0.15;

pub fn improvement_factor(completed_count: usize) -> f64 {
    completed_count as f64 * FACTOR_PER_MILESTONE
}

/// Projects the metrics a store reaches after completing `completed_count`
/// roadmap milestones. Visibility is capped at 100 and rating at 5.
pub fn compute_improvements(before: &MetricsSnapshot, completed_count: usize) -> MetricsSnapshot {
    if completed_count == 0 {
        return *before;
    }

    let factor = improvement_factor(completed_count);

    MetricsSnapshot {
        avg_visibility_score: round0(
            before.avg_visibility_score + VISIBILITY_POINTS_PER_FACTOR * factor,
        )
        .min(100.0),
        avg_conversion_rate: round1(before.avg_conversion_rate + CONVERSION_PERCENT_PER_FACTOR * factor),
        avg_rating: round1(before.avg_rating + RATING_PER_FACTOR * factor).min(5.0),
        monthly_revenue: round0(
            before.monthly_revenue * (1.0 + REVENUE_GROWTH_PER_FACTOR * factor),
        ),
        ..*before
    }
}

pub fn metric_delta(before: f64, after: f64) -> MetricDelta {
    let delta = after - before;
    let percentage = if before == 0.0 {
        None
    } else {
        Some(round1(delta / before * 100.0))
    };

    MetricDelta {
        before,
        after,
        delta,
        percentage,
    }
}

pub fn re_evaluation_summary(result: &ReEvaluationResult) -> ReEvaluationSummary {
    let ReEvaluationResult { before, after } = result;

    let visibility = metric_delta(before.avg_visibility_score, after.avg_visibility_score);
    let conversion = metric_delta(before.avg_conversion_rate, after.avg_conversion_rate);
    let rating = metric_delta(before.avg_rating, after.avg_rating);
    let revenue = metric_delta(before.monthly_revenue, after.monthly_revenue);
    let improved = [&visibility, &conversion, &rating, &revenue]
        .iter()
        .any(|d| d.delta > 0.0);

    ReEvaluationSummary {
        visibility,
        conversion,
        rating,
        revenue,
        improved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_metrics() -> MetricsSnapshot {
        MetricsSnapshot {
            product_count: 24,
            avg_visibility_score: 64.0,
            avg_conversion_rate: 2.8,
            avg_rating: 4.2,
            monthly_revenue: 12400.0,
            competition_index: 72.0,
        }
    }

    #[test]
    fn two_completed_milestones_match_dashboard_projection() {
        let after = compute_improvements(&sample_metrics(), 2);

        assert_eq!(after.avg_visibility_score, 67.0);
        assert_eq!(after.avg_conversion_rate, 2.9);
        assert_eq!(after.avg_rating, 4.3);
        assert_eq!(after.monthly_revenue, 12958.0);
        assert_eq!(after.product_count, 24);
        assert_eq!(after.competition_index, 72.0);
    }

    #[test]
    fn zero_completed_is_identity() {
        let before = sample_metrics();
        assert_eq!(compute_improvements(&before, 0), before);

        let unrounded = MetricsSnapshot {
            avg_rating: 4.25,
            avg_conversion_rate: 1.234,
            ..before
        };
        assert_eq!(compute_improvements(&unrounded, 0), unrounded);
    }

    #[test]
    fn visibility_and_rating_are_capped() {
        let before = MetricsSnapshot {
            avg_visibility_score: 97.0,
            avg_rating: 4.9,
            ..sample_metrics()
        };

        for completed in 0..=50 {
            let after = compute_improvements(&before, completed);
            assert!(after.avg_visibility_score <= 100.0, "completed = {completed}");
            assert!(after.avg_rating <= 5.0, "completed = {completed}");
        }

        let after = compute_improvements(&before, 6);
        assert_eq!(after.avg_visibility_score, 100.0);
        assert_eq!(after.avg_rating, 5.0);
    }

    #[test]
    fn all_six_milestones_scale_revenue() {
        let after = compute_improvements(&sample_metrics(), 6);

        // factor 0.9: 64 + 9, 2.8 + 0.45, 4.2 + 0.18, 12400 * 1.135
        assert_eq!(after.avg_visibility_score, 73.0);
        assert_eq!(after.avg_conversion_rate, 3.3);
        assert_eq!(after.avg_rating, 4.4);
        assert_eq!(after.monthly_revenue, 14074.0);
    }

    #[test]
    fn delta_reports_percentage_against_baseline() {
        let delta = metric_delta(64.0, 67.0);
        assert_eq!(delta.delta, 3.0);
        assert_eq!(delta.percentage, Some(4.7));

        let from_zero = metric_delta(0.0, 5.0);
        assert_eq!(from_zero.percentage, None);
    }

    #[test]
    fn summary_flags_improvement() {
        let before = sample_metrics();
        let after = compute_improvements(&before, 2);
        let summary = re_evaluation_summary(&ReEvaluationResult { before, after });

        assert!(summary.improved);
        assert_eq!(summary.revenue.delta, 558.0);
        assert_eq!(summary.revenue.percentage, Some(4.5));

        let unchanged = re_evaluation_summary(&ReEvaluationResult { before, after: before });
        assert!(!unchanged.improved);
    }
}
