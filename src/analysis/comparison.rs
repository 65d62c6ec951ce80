use crate::analysis::rounding::round_to;
use crate::models::product::{
    ComparisonStatus, ComparisonThresholds, PriceSuggestion, ProductComparison, ProductMetrics,
    ProductSort,
};
use std::cmp::Ordering;

pub const ALL_CATEGORIES: &str = "All";

/// "All" followed by each product category in first-seen order.
pub fn categories(products: &[ProductMetrics]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for product in products {
        if !out.iter().any(|c| c == &product.category) {
            out.push(product.category.clone());
        }
    }
    out
}

pub fn filter_and_sort(
    products: &[ProductMetrics],
    category: Option<&str>,
    sort: ProductSort,
) -> Vec<ProductMetrics> {
    let mut filtered: Vec<ProductMetrics> = products
        .iter()
        .filter(|p| match category {
            None | Some(ALL_CATEGORIES) => true,
            Some(wanted) => p.category == wanted,
        })
        .cloned()
        .collect();

    filtered.sort_by(|a, b| match sort {
        ProductSort::Visibility => descending(a.visibility_score, b.visibility_score),
        ProductSort::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        ProductSort::Rating => descending(a.avg_rating, b.avg_rating),
    });

    filtered
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Percentage by which the product is priced above (positive) or below the
/// market average.
pub fn price_premium_percent(product: &ProductMetrics) -> f64 {
    if product.competitor_avg_price <= 0.0 {
        return 0.0;
    }
    (product.price - product.competitor_avg_price) / product.competitor_avg_price * 100.0
}

pub fn comparison_status(product: &ProductMetrics, thresholds: &ComparisonThresholds) -> ComparisonStatus {
    let rating_diff = product.avg_rating - product.competitor_avg_rating;

    if price_premium_percent(product) > thresholds.price_gap_percent {
        ComparisonStatus::PriceTooHigh
    } else if rating_diff < -thresholds.rating_gap {
        ComparisonStatus::RatingBelowMarket
    } else if product.visibility_score < thresholds.low_visibility_threshold {
        ComparisonStatus::LowVisibility
    } else {
        ComparisonStatus::Competitive
    }
}

/// Price band around the market average, nudged up for products that beat
/// the market on both rating and visibility and down for products trailing
/// on either. Without a known competitor visibility neither comparison holds.
pub fn price_suggestion(product: &ProductMetrics) -> Option<PriceSuggestion> {
    let market_avg = product.competitor_avg_price;
    if market_avg <= 0.0 {
        return None;
    }

    let min = (market_avg * 0.92).max(market_avg - 5.0);
    let max = (market_avg * 1.08).min(market_avg + 10.0);

    let rating_above = product.avg_rating > product.competitor_avg_rating;
    let rating_below = product.avg_rating < product.competitor_avg_rating;
    let (visibility_above, visibility_below) = match product.competitor_avg_visibility {
        Some(market) => (product.visibility_score > market, product.visibility_score < market),
        None => (false, false),
    };

    let suggestion = if rating_above && visibility_above {
        max.min(market_avg + 3.0)
    } else if rating_below || visibility_below {
        min.max(market_avg - 3.0)
    } else {
        market_avg
    };

    Some(PriceSuggestion {
        min: round_to(min, 2),
        max: round_to(max, 2),
        suggestion: round_to(suggestion, 2),
        market_avg: round_to(market_avg, 2),
    })
}

pub fn compare_product(product: &ProductMetrics, thresholds: &ComparisonThresholds) -> ProductComparison {
    let status = comparison_status(product, thresholds);
    ProductComparison {
        product: product.clone(),
        status,
        tone: status.tone(),
        status_label: status.label().to_string(),
        price_suggestion: price_suggestion(product),
    }
}

pub fn comparison_notes(product: &ProductMetrics, status: ComparisonStatus) -> String {
    let price_position = match product.price.partial_cmp(&product.competitor_avg_price) {
        Some(Ordering::Less) => "below",
        Some(Ordering::Greater) => "above",
        _ => "in line with",
    };
    let rating_position = if product.avg_rating >= product.competitor_avg_rating {
        "at or above"
    } else {
        "below"
    };
    let advice = match status {
        ComparisonStatus::PriceTooHigh => "Consider moving toward the suggested price range.",
        ComparisonStatus::RatingBelowMarket => "Address recurring complaints to lift your rating.",
        ComparisonStatus::LowVisibility => "Improve listing copy and images to raise visibility.",
        ComparisonStatus::Competitive => "Keep collecting reviews to stay ahead.",
    };

    format!(
        "Priced {price_position} the market average with a rating {rating_position} market. {advice}"
    )
}
