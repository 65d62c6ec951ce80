use serde_json::json;
use std::fs;
use std::path::Path;
use storepulse_lib::commands::products::{
    get_comparison_history, get_product_comparison, list_products, record_comparison,
};
use storepulse_lib::commands::sentiment::{
    add_feedback_entry, delete_feedback_entry, get_sentiment_overview,
};
use storepulse_lib::commands::settings::{
    get_settings, load_dashboard_settings, DashboardSettings,
};
use storepulse_lib::commands::store::{
    apply_improvements, get_dashboard, get_re_evaluation, get_roadmap, get_store_profile,
    submit_store_profile, toggle_milestone, update_store_profile,
};
use storepulse_lib::models::product::{ComparisonStatus, ProductSort};
use storepulse_lib::models::seed::SeedData;
use storepulse_lib::models::sentiment::{FeedbackCategory, SentimentLabel};
use storepulse_lib::models::store_state::SharedStore;
use tempfile::TempDir;

fn sample_store() -> SharedStore {
    storepulse_lib::run(SeedData::sample())
}

fn create_workspace_with_settings(settings: serde_json::Value) -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let workspace_path = temp_dir.path().to_string_lossy().to_string();
    let settings_dir = temp_dir.path().join(".storepulse");

    fs::create_dir_all(&settings_dir).expect("create settings dir");
    fs::write(
        settings_dir.join("settings.json"),
        serde_json::to_string_pretty(&settings).expect("serialize settings"),
    )
    .expect("write settings");

    (temp_dir, workspace_path)
}

#[tokio::test]
async fn roadmap_toggle_and_apply_compound_across_runs() {
    let store = sample_store();
    let initial = get_roadmap(&store).await.expect("load roadmap");
    assert_eq!(initial.progress.completed, 0);
    assert_eq!(initial.progress.total, 6);

    toggle_milestone(&store, "m1".to_string()).await.expect("toggle m1");
    let roadmap = toggle_milestone(&store, "m2".to_string()).await.expect("toggle m2");
    assert_eq!(roadmap.progress.completed, 2);
    assert_eq!(roadmap.progress.percentage, 33.0);

    let first = apply_improvements(&store).await.expect("first apply");
    assert_eq!(first.result.before, SeedData::sample().metrics);
    assert_eq!(first.result.after.avg_visibility_score, 67.0);
    assert_eq!(first.result.after.avg_conversion_rate, 2.9);
    assert_eq!(first.result.after.avg_rating, 4.3);
    assert_eq!(first.result.after.monthly_revenue, 12958.0);
    assert_eq!(first.result.after.product_count, 24);
    assert!(first.summary.improved);

    let second = apply_improvements(&store).await.expect("second apply");
    assert_eq!(second.result.before, first.result.after);
    assert_eq!(second.result.after.avg_visibility_score, 70.0);

    let latest = get_re_evaluation(&store)
        .await
        .expect("load re-evaluation")
        .expect("re-evaluation present");
    assert_eq!(latest, second);

    let dashboard = get_dashboard(&store, &DashboardSettings::default())
        .await
        .expect("load dashboard");
    assert_eq!(dashboard.metrics, second.result.after);
    assert!(dashboard.has_re_evaluation);
}

#[tokio::test]
async fn apply_without_completed_milestones_is_identity() {
    let store = sample_store();
    assert!(get_re_evaluation(&store).await.expect("load").is_none());

    let view = apply_improvements(&store).await.expect("apply");
    assert_eq!(view.result.before, view.result.after);
    assert!(!view.summary.improved);
}

#[tokio::test]
async fn profile_update_and_validated_submit_contract() {
    let store = sample_store();
    let mut profile = get_store_profile(&store).await.expect("load profile");

    profile.name = "  Gadget Barn  ".to_string();
    let submitted = submit_store_profile(&store, profile.clone())
        .await
        .expect("submit valid profile");
    assert_eq!(submitted.name, "Gadget Barn");
    assert_eq!(get_store_profile(&store).await.expect("reload"), submitted);

    let mut invalid = submitted.clone();
    invalid.email = "nobody".to_string();
    let err = submit_store_profile(&store, invalid)
        .await
        .expect_err("invalid email rejected");
    assert!(err.contains("email"));
    assert_eq!(get_store_profile(&store).await.expect("reload"), submitted);

    let mut replaced = submitted.clone();
    replaced.social_media = Default::default();
    let updated = update_store_profile(&store, replaced.clone())
        .await
        .expect("update profile");
    assert_eq!(updated, replaced);
    assert_eq!(get_store_profile(&store).await.expect("reload"), replaced);
}

#[tokio::test]
async fn product_listing_comparison_and_history_contract() {
    let store = sample_store();
    let settings = DashboardSettings::default();

    let listing = list_products(&store, &settings, Some("Home".to_string()), Some(ProductSort::Rating))
        .await
        .expect("list products");
    assert_eq!(listing.categories, vec!["All", "Electronics", "Sports", "Home"]);
    let ids: Vec<&str> = listing.products.iter().map(|c| c.product.id.as_str()).collect();
    assert_eq!(ids, vec!["5", "4"]);

    let all = list_products(&store, &settings, None, None).await.expect("list all");
    assert_eq!(all.products.len(), 5);
    assert_eq!(all.products[0].product.id, "3");

    let lamp = get_product_comparison(&store, &settings, "4".to_string())
        .await
        .expect("compare lamp");
    assert_eq!(lamp.status, ComparisonStatus::RatingBelowMarket);

    let missing = get_product_comparison(&store, &settings, "404".to_string())
        .await
        .expect_err("unknown product");
    assert_eq!(missing, "Product not found: 404");

    record_comparison(&store, &settings, "2".to_string())
        .await
        .expect("record tracker");
    record_comparison(&store, &settings, "4".to_string())
        .await
        .expect("record lamp");
    assert!(record_comparison(&store, &settings, "404".to_string()).await.is_err());

    let history = get_comparison_history(&store).await.expect("history");
    let recorded: Vec<(&str, ComparisonStatus)> = history
        .iter()
        .map(|r| (r.product_id.as_str(), r.status))
        .collect();
    assert_eq!(
        recorded,
        vec![
            ("2", ComparisonStatus::PriceTooHigh),
            ("4", ComparisonStatus::RatingBelowMarket),
        ]
    );
}

#[tokio::test]
async fn feedback_entries_flow_into_sentiment_overview() {
    let store = sample_store();
    let settings = DashboardSettings::default();

    let empty = add_feedback_entry(&store, &settings, "   ".to_string()).await;
    assert!(empty.is_err());

    let complaint = add_feedback_entry(
        &store,
        &settings,
        "Shipping was late and the box arrived damaged".to_string(),
    )
    .await
    .expect("add complaint");
    assert_eq!(complaint.label, SentimentLabel::Negative);
    assert_eq!(
        complaint.categories,
        vec![FeedbackCategory::Shipping, FeedbackCategory::Packaging]
    );
    assert_eq!(complaint.suggestions.len(), 2);

    let praise = add_feedback_entry(&store, &settings, "Great quality, love it".to_string())
        .await
        .expect("add praise");
    assert_eq!(praise.label, SentimentLabel::Positive);
    assert!(praise.suggestions.is_empty());

    let overview = get_sentiment_overview(&store, &settings).await.expect("overview");
    assert_eq!(overview.snapshot.positive_percentage, 62.0);
    assert_eq!(overview.trend.len(), 4);
    assert_eq!(overview.trend_chart.points.len(), 4);
    assert_eq!(overview.summary.entry_count, 2);
    assert_eq!(overview.summary.positive_percentage, 50.0);
    assert_eq!(overview.summary.negative_percentage, 50.0);

    assert!(delete_feedback_entry(&store, complaint.id.clone()).await.expect("delete"));
    assert!(!delete_feedback_entry(&store, complaint.id).await.expect("delete again"));

    let overview = get_sentiment_overview(&store, &settings).await.expect("overview");
    assert_eq!(overview.entries, vec![praise]);
}

#[tokio::test]
async fn workspace_settings_are_clamped_and_applied_without_writing() {
    let written = json!({
        "sentimentThreshold": 35,
        "lowVisibilityThreshold": 80,
        "defaultProductSort": "price",
        "chartWidth": 300
    });
    let (tmp, workspace_path) = create_workspace_with_settings(written.clone());

    let loaded = get_settings(workspace_path.clone()).await.expect("load settings");
    assert_eq!(loaded["sentimentThreshold"], json!(0.9));
    assert_eq!(loaded["chartWidth"], json!(300.0));
    assert_eq!(loaded["ratingGap"], json!(0.3));
    assert_eq!(loaded["schema_version"], json!(1));

    let on_disk: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(tmp.path().join(".storepulse").join("settings.json")).expect("read"),
    )
    .expect("parse");
    assert_eq!(on_disk, written);

    let settings = load_dashboard_settings(&workspace_path).expect("typed settings");
    assert_eq!(settings.default_sort, ProductSort::Price);
    assert_eq!(settings.chart.width, 300.0);

    let store = sample_store();
    let listing = list_products(&store, &settings, Some("Electronics".to_string()), None)
        .await
        .expect("list with workspace settings");
    assert_eq!(listing.products[0].product.id, "1");
    assert_eq!(listing.products[0].status, ComparisonStatus::LowVisibility);

    // One positive and one negative word cancel out.
    let neutral = add_feedback_entry(&store, &settings, "good but slow".to_string())
        .await
        .expect("add feedback");
    assert_eq!(neutral.label, SentimentLabel::Neutral);
}

#[tokio::test]
async fn missing_settings_file_yields_defaults() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let workspace_path = temp_dir.path().to_string_lossy().to_string();

    let settings = load_dashboard_settings(&workspace_path).expect("typed settings");
    assert_eq!(settings, DashboardSettings::default());
    assert!(!Path::new(&workspace_path).join(".storepulse").exists());
}

#[tokio::test]
async fn seed_file_round_trips_into_a_store() {
    let temp_dir = tempfile::tempdir().expect("create temp dir");
    let seed_path = temp_dir.path().join("seed.json");
    fs::write(
        &seed_path,
        serde_json::to_string(&SeedData::sample()).expect("serialize seed"),
    )
    .expect("write seed");

    let seed = SeedData::from_json_file(&seed_path).expect("load seed");
    let store = storepulse_lib::run(seed);
    let roadmap = get_roadmap(&store).await.expect("roadmap");
    assert_eq!(roadmap.milestones.len(), 6);

    let mut repeated = SeedData::sample();
    repeated.roadmap[1].id = "m1".to_string();
    fs::write(&seed_path, serde_json::to_string(&repeated).expect("serialize seed"))
        .expect("write repeated seed");
    assert!(SeedData::from_json_file(&seed_path).is_err());

    let mut precompleted = SeedData::sample();
    precompleted.roadmap[2].completed = true;
    let store = storepulse_lib::run(precompleted);
    let roadmap = toggle_milestone(&store, "m1".to_string()).await.expect("toggle m1");
    assert_eq!(roadmap.progress.completed, 1);
    assert!(!roadmap.milestones[2].completed);

    fs::write(&seed_path, "{ not json").expect("write broken seed");
    assert!(SeedData::from_json_file(&seed_path).is_err());
}
