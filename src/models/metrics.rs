use serde::{Deserialize, Serialize};

/// Point-in-time store performance numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub product_count: u32,
    pub avg_visibility_score: f64, // 0-100
    pub avg_conversion_rate: f64,  // percentage
    pub avg_rating: f64,           // 0-5
    pub monthly_revenue: f64,
    pub competition_index: f64, // 0-100, higher = more competition
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReEvaluationResult {
    pub before: MetricsSnapshot,
    pub after: MetricsSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    pub before: f64,
    pub after: f64,
    pub delta: f64,
    /// One-decimal percentage change; `None` when the baseline is zero.
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReEvaluationSummary {
    pub visibility: MetricDelta,
    pub conversion: MetricDelta,
    pub rating: MetricDelta,
    pub revenue: MetricDelta,
    pub improved: bool,
}
