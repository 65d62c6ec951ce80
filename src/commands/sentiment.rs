use crate::analysis::charts::line_chart;
use crate::analysis::sentiment::summarize_feedback;
use crate::commands::settings::DashboardSettings;
use crate::commands::store::lock_store;
use crate::models::sentiment::FeedbackEntry;
use crate::models::store_state::SharedStore;
use crate::models::trend::TrendDataPoint;
use crate::models::views::SentimentOverview;

pub async fn get_sentiment_overview(
    store: &SharedStore,
    settings: &DashboardSettings,
) -> Result<SentimentOverview, String> {
    get_sentiment_overview_internal(store, settings)
}

pub fn get_sentiment_overview_internal(
    store: &SharedStore,
    settings: &DashboardSettings,
) -> Result<SentimentOverview, String> {
    let state = lock_store(store)?;
    let positive_series: Vec<TrendDataPoint> = state
        .sentiment_trend()
        .iter()
        .map(|t| TrendDataPoint::new(&t.period_label, t.positive_score))
        .collect();

    Ok(SentimentOverview {
        snapshot: state.sentiment_snapshot().clone(),
        trend: state.sentiment_trend().to_vec(),
        trend_chart: line_chart(&positive_series, &settings.chart),
        entries: state.feedback_entries().to_vec(),
        summary: summarize_feedback(state.feedback_entries()),
    })
}

pub async fn add_feedback_entry(
    store: &SharedStore,
    settings: &DashboardSettings,
    text: String,
) -> Result<FeedbackEntry, String> {
    let mut state = lock_store(store)?;
    state
        .add_feedback_entry(&text, settings.sentiment_threshold)
        .ok_or_else(|| "Feedback text is empty".to_string())
}

pub async fn delete_feedback_entry(store: &SharedStore, entry_id: String) -> Result<bool, String> {
    let mut state = lock_store(store)?;
    Ok(state.delete_feedback_entry(&entry_id))
}
