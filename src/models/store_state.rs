use crate::analysis::comparison::{comparison_notes, comparison_status};
use crate::analysis::improvement::compute_improvements;
use crate::analysis::roadmap::completed_count;
use crate::analysis::sentiment::analyze_feedback;
use crate::models::metrics::{MetricsSnapshot, ReEvaluationResult};
use crate::models::product::{ComparisonRecord, ComparisonThresholds, ProductMetrics};
use crate::models::profile::StoreProfile;
use crate::models::roadmap::Milestone;
use crate::models::seed::SeedData;
use crate::models::sentiment::{FeedbackEntry, SentimentSnapshot, SentimentTrend};
use crate::models::trend::TrendDataPoint;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::sync::{Arc, Mutex};

/// Handle the command layer receives; every command takes it explicitly.
pub type SharedStore = Arc<Mutex<StoreState>>;

/// Session-scoped holder of the seller dataset.
#[derive(Debug, Clone)]
pub struct StoreState {
    metrics: MetricsSnapshot,
    products: Vec<ProductMetrics>,
    sentiment_snapshot: SentimentSnapshot,
    sentiment_trend: Vec<SentimentTrend>,
    feedback_entries: Vec<FeedbackEntry>,
    comparison_history: Vec<ComparisonRecord>,
    roadmap: Vec<Milestone>,
    re_evaluation: Option<ReEvaluationResult>,
    visibility_trend: Vec<TrendDataPoint>,
    revenue_trend: Vec<TrendDataPoint>,
    store_profile: StoreProfile,
}

impl StoreState {
    /// Builds a fresh session. Every milestone starts incomplete.
    pub fn new(seed: SeedData) -> Self {
        let mut roadmap = seed.roadmap;
        for milestone in roadmap.iter_mut().filter(|m| m.completed) {
            warn!("Seed marks milestone {} completed; starting it incomplete", milestone.id);
            milestone.completed = false;
        }

        Self {
            metrics: seed.metrics,
            products: seed.products,
            sentiment_snapshot: seed.sentiment_snapshot,
            sentiment_trend: seed.sentiment_trend,
            feedback_entries: Vec::new(),
            comparison_history: Vec::new(),
            roadmap,
            re_evaluation: None,
            visibility_trend: seed.visibility_trend,
            revenue_trend: seed.revenue_trend,
            store_profile: seed.store_profile,
        }
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn metrics(&self) -> &MetricsSnapshot {
        &self.metrics
    }

    pub fn products(&self) -> &[ProductMetrics] {
        &self.products
    }

    pub fn product(&self, product_id: &str) -> Option<&ProductMetrics> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn sentiment_snapshot(&self) -> &SentimentSnapshot {
        &self.sentiment_snapshot
    }

    pub fn sentiment_trend(&self) -> &[SentimentTrend] {
        &self.sentiment_trend
    }

    pub fn feedback_entries(&self) -> &[FeedbackEntry] {
        &self.feedback_entries
    }

    pub fn comparison_history(&self) -> &[ComparisonRecord] {
        &self.comparison_history
    }

    pub fn roadmap(&self) -> &[Milestone] {
        &self.roadmap
    }

    pub fn re_evaluation(&self) -> Option<&ReEvaluationResult> {
        self.re_evaluation.as_ref()
    }

    pub fn visibility_trend(&self) -> &[TrendDataPoint] {
        &self.visibility_trend
    }

    pub fn revenue_trend(&self) -> &[TrendDataPoint] {
        &self.revenue_trend
    }

    pub fn store_profile(&self) -> &StoreProfile {
        &self.store_profile
    }

    pub fn completed_count(&self) -> usize {
        completed_count(&self.roadmap)
    }

    /// Flips the milestone's completion flag. Unknown ids leave the roadmap
    /// untouched and return `false`.
    pub fn toggle_milestone(&mut self, id: &str) -> bool {
        match self.roadmap.iter_mut().find(|m| m.id == id) {
            Some(milestone) => {
                milestone.completed = !milestone.completed;
                debug!("Milestone {id} completed = {}", milestone.completed);
                true
            }
            None => {
                warn!("Ignoring toggle for unknown milestone {id}");
                false
            }
        }
    }

    /// Projects current metrics forward by the completed milestones, keeps the
    /// before/after pair and makes the projection the current metrics.
    /// Calling it again compounds on the previous result.
    pub fn apply_improvements(&mut self) -> ReEvaluationResult {
        let completed = self.completed_count();
        let before = self.metrics;
        let after = compute_improvements(&before, completed);
        let result = ReEvaluationResult { before, after };

        info!(
            "Applied improvements for {completed} completed milestones: visibility {} -> {}, revenue {} -> {}",
            before.avg_visibility_score,
            after.avg_visibility_score,
            before.monthly_revenue,
            after.monthly_revenue
        );

        self.re_evaluation = Some(result);
        self.metrics = after;
        result
    }

    /// Replaces the profile wholesale. Callers validate beforehand.
    pub fn update_store_profile(&mut self, profile: StoreProfile) {
        debug!("Store profile replaced: {}", profile.name);
        self.store_profile = profile;
    }

    /// Analyzes and stores a piece of customer feedback. Blank text is ignored.
    pub fn add_feedback_entry(&mut self, text: &str, threshold: f64) -> Option<FeedbackEntry> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let analysis = analyze_feedback(text, threshold);
        let entry = FeedbackEntry {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.to_string(),
            label: analysis.label,
            score: analysis.score,
            categories: analysis.categories,
            suggestions: analysis.suggestions,
            created_at: chrono::Utc::now().timestamp(),
        };

        debug!("Feedback {} labelled {:?}", entry.id, entry.label);
        self.feedback_entries.push(entry.clone());
        Some(entry)
    }

    pub fn delete_feedback_entry(&mut self, id: &str) -> bool {
        let before = self.feedback_entries.len();
        self.feedback_entries.retain(|e| e.id != id);
        before != self.feedback_entries.len()
    }

    /// Appends a dated comparison of one product against its market.
    pub fn record_comparison(
        &mut self,
        product_id: &str,
        thresholds: &ComparisonThresholds,
        date: NaiveDate,
    ) -> Option<ComparisonRecord> {
        let product = self.product(product_id)?;
        let status = comparison_status(product, thresholds);
        let record = ComparisonRecord {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            price: product.price,
            competitor_avg_price: product.competitor_avg_price,
            avg_rating: product.avg_rating,
            competitor_avg_rating: product.competitor_avg_rating,
            visibility_score: product.visibility_score,
            competitor_avg_visibility: product.competitor_avg_visibility,
            review_count: product.review_count,
            status,
            notes: comparison_notes(product, status),
        };

        self.comparison_history.push(record.clone());
        Some(record)
    }
}
