use crate::models::metrics::{MetricsSnapshot, ReEvaluationResult, ReEvaluationSummary};
use crate::models::product::ProductComparison;
use crate::models::roadmap::{Milestone, MilestoneGroup, ProjectedImpact, RoadmapProgress};
use crate::models::sentiment::{FeedbackEntry, FeedbackSummary, SentimentSnapshot, SentimentTrend};
use crate::models::trend::{LineChart, TrendDataPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub metrics: MetricsSnapshot,
    pub visibility_chart: LineChart,
    pub revenue_chart: LineChart,
    pub roadmap_progress: RoadmapProgress,
    pub has_re_evaluation: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapView {
    pub milestones: Vec<Milestone>,
    pub groups: Vec<MilestoneGroup>,
    pub progress: RoadmapProgress,
    pub projected_impact: ProjectedImpact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReEvaluationView {
    pub result: ReEvaluationResult,
    pub summary: ReEvaluationSummary,
    pub bars: Vec<TrendDataPoint>,
    pub bar_widths: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub categories: Vec<String>,
    pub products: Vec<ProductComparison>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentOverview {
    pub snapshot: SentimentSnapshot,
    pub trend: Vec<SentimentTrend>,
    pub trend_chart: LineChart,
    pub entries: Vec<FeedbackEntry>,
    pub summary: FeedbackSummary,
}
