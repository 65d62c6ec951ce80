use crate::error::{Result, StoreError};
use crate::models::metrics::MetricsSnapshot;
use crate::models::product::ProductMetrics;
use crate::models::profile::{SocialMedia, StoreProfile};
use crate::models::roadmap::{Difficulty, Impact, Milestone, MilestoneCategory};
use crate::models::sentiment::{SentimentSnapshot, SentimentTrend};
use crate::models::trend::TrendDataPoint;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Initial dataset handed to [`crate::models::store_state::StoreState::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub metrics: MetricsSnapshot,
    pub products: Vec<ProductMetrics>,
    pub sentiment_snapshot: SentimentSnapshot,
    pub sentiment_trend: Vec<SentimentTrend>,
    pub roadmap: Vec<Milestone>,
    pub visibility_trend: Vec<TrendDataPoint>,
    pub revenue_trend: Vec<TrendDataPoint>,
    pub store_profile: StoreProfile,
}

impl SeedData {
    /// Parses a seed and rejects roadmaps that reuse a milestone id.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(raw)?;
        seed.check_unique_milestones()?;
        Ok(seed)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    fn check_unique_milestones(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for milestone in &self.roadmap {
            if !seen.insert(milestone.id.as_str()) {
                return Err(StoreError::DuplicateMilestone(milestone.id.clone()));
            }
        }
        Ok(())
    }

    /// The stock demo store.
    pub fn sample() -> Self {
        Self {
            metrics: MetricsSnapshot {
                product_count: 24,
                avg_visibility_score: 64.0,
                avg_conversion_rate: 2.8,
                avg_rating: 4.2,
                monthly_revenue: 12400.0,
                competition_index: 72.0,
            },
            products: sample_products(),
            sentiment_snapshot: SentimentSnapshot {
                positive_percentage: 62.0,
                neutral_percentage: 23.0,
                negative_percentage: 15.0,
                top_positive_keywords: to_strings(&[
                    "fast delivery",
                    "good quality",
                    "great value",
                    "comfortable",
                    "durable",
                ]),
                top_negative_keywords: to_strings(&[
                    "late shipping",
                    "confusing sizing",
                    "poor packaging",
                    "expensive",
                ]),
            },
            sentiment_trend: vec![
                trend_period("Week 1", 54.0, 22.0),
                trend_period("Week 2", 58.0, 19.0),
                trend_period("Week 3", 61.0, 17.0),
                trend_period("Week 4", 62.0, 15.0),
            ],
            roadmap: sample_roadmap(),
            visibility_trend: vec![
                TrendDataPoint::new("Jan", 54.0),
                TrendDataPoint::new("Feb", 58.0),
                TrendDataPoint::new("Mar", 61.0),
                TrendDataPoint::new("Apr", 59.0),
                TrendDataPoint::new("May", 64.0),
                TrendDataPoint::new("Jun", 64.0),
            ],
            revenue_trend: vec![
                TrendDataPoint::new("Jan", 8200.0),
                TrendDataPoint::new("Feb", 9100.0),
                TrendDataPoint::new("Mar", 10500.0),
                TrendDataPoint::new("Apr", 9800.0),
                TrendDataPoint::new("May", 11200.0),
                TrendDataPoint::new("Jun", 12400.0),
            ],
            store_profile: StoreProfile {
                name: "TechGear Haven".to_string(),
                description: "Your one-stop shop for premium electronics and tech accessories. We pride ourselves on quality products and exceptional customer service.".to_string(),
                url: "https://techgearhaven.example.com".to_string(),
                email: "contact@techgearhaven.com".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                location: "San Francisco, CA".to_string(),
                founded: "2019".to_string(),
                category: "Electronics & Accessories".to_string(),
                social_media: SocialMedia {
                    facebook: "https://facebook.com/techgearhaven".to_string(),
                    twitter: "https://twitter.com/techgearhaven".to_string(),
                    instagram: "https://instagram.com/techgearhaven".to_string(),
                    linkedin: "https://linkedin.com/company/techgearhaven".to_string(),
                },
            },
        }
    }
}

fn sample_products() -> Vec<ProductMetrics> {
    vec![
        product("1", "Wireless Bluetooth Headphones", "Electronics", 79.99, 4.5, 234, 78.0, 3.2, 69.99, 4.3),
        product("2", "Smart Fitness Tracker", "Electronics", 129.99, 4.1, 156, 65.0, 2.1, 99.99, 4.4),
        product("3", "Yoga Mat Premium", "Sports", 34.99, 4.7, 412, 82.0, 4.5, 39.99, 4.2),
        product("4", "LED Desk Lamp", "Home", 45.99, 3.9, 89, 52.0, 1.8, 42.99, 4.5),
        product("5", "Ceramic Coffee Mug Set", "Home", 24.99, 4.6, 324, 71.0, 3.8, 22.99, 4.3),
    ]
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    avg_rating: f64,
    review_count: u32,
    visibility_score: f64,
    conversion_rate: f64,
    competitor_avg_price: f64,
    competitor_avg_rating: f64,
) -> ProductMetrics {
    ProductMetrics {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        price,
        avg_rating,
        review_count,
        visibility_score,
        conversion_rate,
        competitor_avg_price,
        competitor_avg_rating,
        competitor_avg_visibility: None,
    }
}

fn sample_roadmap() -> Vec<Milestone> {
    use Difficulty::*;
    use MilestoneCategory::*;

    vec![
        milestone(
            "m1",
            "Rewrite top 5 product descriptions",
            "Use keyword-rich, clear copy highlighting benefits and features",
            Listings,
            Medium,
            Impact::High,
        ),
        milestone(
            "m2",
            "Respond to all negative reviews within 24 hours",
            "Show customers you care and can resolve issues quickly",
            CustomerService,
            Easy,
            Impact::Medium,
        ),
        milestone(
            "m3",
            "Add UGC photos to top 3 products",
            "User-generated content builds trust and improves conversion",
            Marketing,
            Easy,
            Impact::Medium,
        ),
        milestone(
            "m4",
            "Experiment with 10% discount on high-competition products",
            "Price testing can reveal optimal pricing points",
            Pricing,
            Easy,
            Impact::Low,
        ),
        milestone(
            "m5",
            "Optimize product images for mobile",
            "Ensure images load fast and look great on all devices",
            Listings,
            Medium,
            Impact::High,
        ),
        milestone(
            "m6",
            "Implement email follow-up for reviews",
            "Automated follow-ups increase review count and ratings",
            CustomerService,
            Hard,
            Impact::High,
        ),
    ]
}

fn milestone(
    id: &str,
    title: &str,
    description: &str,
    category: MilestoneCategory,
    difficulty: Difficulty,
    estimated_impact: Impact,
) -> Milestone {
    Milestone {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        difficulty,
        estimated_impact,
        completed: false,
    }
}

fn trend_period(label: &str, positive_score: f64, negative_score: f64) -> SentimentTrend {
    SentimentTrend {
        period_label: label.to_string(),
        positive_score,
        negative_score,
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
