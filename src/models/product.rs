use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetrics {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub avg_rating: f64,
    pub review_count: u32,
    pub visibility_score: f64,
    pub conversion_rate: f64,
    pub competitor_avg_price: f64,
    pub competitor_avg_rating: f64,
    #[serde(default)]
    pub competitor_avg_visibility: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProductSort {
    #[default]
    Visibility,
    Price,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonStatus {
    PriceTooHigh,
    RatingBelowMarket,
    LowVisibility,
    Competitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
}

impl ComparisonStatus {
    pub fn tone(self) -> StatusTone {
        match self {
            ComparisonStatus::PriceTooHigh | ComparisonStatus::LowVisibility => StatusTone::Warning,
            ComparisonStatus::RatingBelowMarket => StatusTone::Danger,
            ComparisonStatus::Competitive => StatusTone::Success,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ComparisonStatus::PriceTooHigh => "Price too high",
            ComparisonStatus::RatingBelowMarket => "Rating below market",
            ComparisonStatus::LowVisibility => "Low visibility",
            ComparisonStatus::Competitive => "Competitive",
        }
    }
}

/// Thresholds used to judge a product against its market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonThresholds {
    pub price_gap_percent: f64,
    pub rating_gap: f64,
    pub low_visibility_threshold: f64,
}

impl Default for ComparisonThresholds {
    fn default() -> Self {
        Self {
            price_gap_percent: 15.0,
            rating_gap: 0.3,
            low_visibility_threshold: 60.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub min: f64,
    pub max: f64,
    pub suggestion: f64,
    pub market_avg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComparison {
    pub product: ProductMetrics,
    pub status: ComparisonStatus,
    pub tone: StatusTone,
    pub status_label: String,
    pub price_suggestion: Option<PriceSuggestion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub product_id: String,
    pub product_name: String,
    pub date: String, // YYYY-MM-DD
    pub price: f64,
    pub competitor_avg_price: f64,
    pub avg_rating: f64,
    pub competitor_avg_rating: f64,
    pub visibility_score: f64,
    pub competitor_avg_visibility: Option<f64>,
    pub review_count: u32,
    pub status: ComparisonStatus,
    pub notes: String,
}
