use crate::analysis::charts::{bar_widths, line_chart, re_evaluation_bars};
use crate::analysis::improvement::re_evaluation_summary;
use crate::analysis::roadmap::{group_by_category, progress, projected_impact};
use crate::analysis::validation::validate_store_profile;
use crate::commands::settings::DashboardSettings;
use crate::error::StoreError;
use crate::models::metrics::ReEvaluationResult;
use crate::models::profile::StoreProfile;
use crate::models::store_state::{SharedStore, StoreState};
use crate::models::views::{DashboardView, ReEvaluationView, RoadmapView};
use log::info;
use std::sync::MutexGuard;

pub(crate) fn lock_store(store: &SharedStore) -> Result<MutexGuard<'_, StoreState>, String> {
    store.lock().map_err(|_| StoreError::LockPoisoned.to_string())
}

pub async fn get_dashboard(store: &SharedStore, settings: &DashboardSettings) -> Result<DashboardView, String> {
    get_dashboard_internal(store, settings)
}

pub fn get_dashboard_internal(store: &SharedStore, settings: &DashboardSettings) -> Result<DashboardView, String> {
    let state = lock_store(store)?;
    Ok(DashboardView {
        metrics: *state.metrics(),
        visibility_chart: line_chart(state.visibility_trend(), &settings.chart),
        revenue_chart: line_chart(state.revenue_trend(), &settings.chart),
        roadmap_progress: progress(state.roadmap()),
        has_re_evaluation: state.re_evaluation().is_some(),
    })
}

pub async fn get_roadmap(store: &SharedStore) -> Result<RoadmapView, String> {
    get_roadmap_internal(store)
}

pub fn get_roadmap_internal(store: &SharedStore) -> Result<RoadmapView, String> {
    let state = lock_store(store)?;
    Ok(roadmap_view(&state))
}

/// Flips a milestone and returns the refreshed roadmap. Unknown ids leave the
/// roadmap as it was.
pub async fn toggle_milestone(store: &SharedStore, milestone_id: String) -> Result<RoadmapView, String> {
    toggle_milestone_internal(store, &milestone_id)
}

pub fn toggle_milestone_internal(store: &SharedStore, milestone_id: &str) -> Result<RoadmapView, String> {
    let mut state = lock_store(store)?;
    state.toggle_milestone(milestone_id);
    Ok(roadmap_view(&state))
}

pub async fn apply_improvements(store: &SharedStore) -> Result<ReEvaluationView, String> {
    apply_improvements_internal(store)
}

pub fn apply_improvements_internal(store: &SharedStore) -> Result<ReEvaluationView, String> {
    let mut state = lock_store(store)?;
    let result = state.apply_improvements();
    Ok(re_evaluation_view(&result))
}

pub async fn get_re_evaluation(store: &SharedStore) -> Result<Option<ReEvaluationView>, String> {
    let state = lock_store(store)?;
    Ok(state.re_evaluation().map(re_evaluation_view))
}

pub async fn get_store_profile(store: &SharedStore) -> Result<StoreProfile, String> {
    let state = lock_store(store)?;
    Ok(state.store_profile().clone())
}

/// Stores a profile the form layer has already validated.
pub async fn update_store_profile(store: &SharedStore, profile: StoreProfile) -> Result<StoreProfile, String> {
    update_store_profile_internal(store, profile)
}

pub fn update_store_profile_internal(store: &SharedStore, profile: StoreProfile) -> Result<StoreProfile, String> {
    let mut state = lock_store(store)?;
    state.update_store_profile(profile);
    Ok(state.store_profile().clone())
}

/// Validates a raw form submission, then stores the trimmed profile.
pub async fn submit_store_profile(store: &SharedStore, profile: StoreProfile) -> Result<StoreProfile, String> {
    submit_store_profile_internal(store, &profile)
}

pub fn submit_store_profile_internal(store: &SharedStore, profile: &StoreProfile) -> Result<StoreProfile, String> {
    let validated =
        validate_store_profile(profile).map_err(|errors| StoreError::Validation(errors).to_string())?;
    info!("Store profile updated for {}", validated.name);
    update_store_profile_internal(store, validated)
}

fn roadmap_view(state: &StoreState) -> RoadmapView {
    let roadmap = state.roadmap();
    RoadmapView {
        milestones: roadmap.to_vec(),
        groups: group_by_category(roadmap),
        progress: progress(roadmap),
        projected_impact: projected_impact(state.completed_count()),
    }
}

fn re_evaluation_view(result: &ReEvaluationResult) -> ReEvaluationView {
    let bars = re_evaluation_bars(&result.after);
    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    ReEvaluationView {
        result: *result,
        summary: re_evaluation_summary(result),
        bar_widths: bar_widths(&values, Some(100.0)),
        bars,
    }
}
