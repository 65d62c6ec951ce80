use crate::error::StoreError;
use crate::models::product::{ComparisonThresholds, ProductSort};
use crate::models::trend::ChartGeometry;
use log::warn;
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: i64 = 1;

const SORT_KEY: &str = "defaultProductSort";
const SORT_VALUES: &[&str] = &["visibility", "price", "rating"];

/// A numeric setting with its accepted range and fallback.
struct Bounded {
    key: &'static str,
    min: f64,
    max: f64,
    default: f64,
}

const NUMERIC_SETTINGS: &[Bounded] = &[
    Bounded { key: "priceGapPercent", min: 1.0, max: 100.0, default: 15.0 },
    Bounded { key: "ratingGap", min: 0.05, max: 2.0, default: 0.3 },
    Bounded { key: "lowVisibilityThreshold", min: 0.0, max: 100.0, default: 60.0 },
    Bounded { key: "sentimentThreshold", min: 0.0, max: 0.9, default: 0.2 },
    Bounded { key: "chartWidth", min: 50.0, max: 1000.0, default: 100.0 },
    Bounded { key: "chartHeight", min: 50.0, max: 1000.0, default: 200.0 },
    Bounded { key: "chartPadding", min: 0.0, max: 20.0, default: 10.0 },
];

/// Typed view of the settings the analyses consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSettings {
    pub thresholds: ComparisonThresholds,
    pub sentiment_threshold: f64,
    pub chart: ChartGeometry,
    pub default_sort: ProductSort,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self::from_value(&normalize_settings(json!({})))
    }
}

impl DashboardSettings {
    /// Reads a normalized settings object.
    pub fn from_value(settings: &Value) -> Self {
        let number = |key: &str| {
            settings
                .get(key)
                .and_then(Value::as_f64)
                .or_else(|| NUMERIC_SETTINGS.iter().find(|b| b.key == key).map(|b| b.default))
                .unwrap_or_default()
        };

        let default_sort = match settings.get(SORT_KEY).and_then(Value::as_str) {
            Some("price") => ProductSort::Price,
            Some("rating") => ProductSort::Rating,
            _ => ProductSort::Visibility,
        };

        Self {
            thresholds: ComparisonThresholds {
                price_gap_percent: number("priceGapPercent"),
                rating_gap: number("ratingGap"),
                low_visibility_threshold: number("lowVisibilityThreshold"),
            },
            sentiment_threshold: number("sentimentThreshold"),
            chart: ChartGeometry {
                width: number("chartWidth"),
                height: number("chartHeight"),
                padding: number("chartPadding"),
            },
            default_sort,
        }
    }
}

pub async fn get_settings(workspace_path: String) -> Result<Value, String> {
    load_settings_from_disk(&workspace_path)
}

pub fn load_dashboard_settings(workspace_path: &str) -> Result<DashboardSettings, String> {
    let settings = load_settings_from_disk(workspace_path)?;
    Ok(DashboardSettings::from_value(&settings))
}

/// Reads `<workspace>/.storepulse/settings.json`. A missing or malformed file
/// yields the defaults; the file is never written.
pub fn load_settings_from_disk(workspace_path: &str) -> Result<Value, String> {
    let path = settings_path(workspace_path);

    let raw = if path.exists() {
        let contents = fs::read_to_string(&path).map_err(|e| StoreError::Io(e).to_string())?;
        serde_json::from_str::<Value>(&contents).unwrap_or_else(|e| {
            warn!("Ignoring malformed {}: {e}", path.display());
            json!({})
        })
    } else {
        json!({})
    };

    Ok(normalize_settings(raw))
}

fn settings_path(workspace_path: &str) -> PathBuf {
    Path::new(workspace_path)
        .join(".storepulse")
        .join("settings.json")
}

fn normalize_settings(input: Value) -> Value {
    let mut settings = match input {
        Value::Object(map) => map,
        other => {
            warn!("Settings must be a JSON object, got {other}");
            Map::new()
        }
    };

    for bounded in NUMERIC_SETTINGS {
        let value = settings
            .get(bounded.key)
            .and_then(Value::as_f64)
            .unwrap_or(bounded.default)
            .clamp(bounded.min, bounded.max);
        settings.insert(bounded.key.to_string(), json!(value));
    }

    let sort = settings
        .get(SORT_KEY)
        .and_then(Value::as_str)
        .filter(|value| SORT_VALUES.contains(value))
        .unwrap_or(SORT_VALUES[0])
        .to_string();
    settings.insert(SORT_KEY.to_string(), json!(sort));
    settings.insert("schema_version".to_string(), json!(SETTINGS_SCHEMA_VERSION));

    Value::Object(settings)
}
