use crate::analysis::rounding::round0;
use crate::models::sentiment::{
    FeedbackAnalysis, FeedbackCategory, FeedbackEntry, FeedbackSummary, SentimentLabel,
};
use std::collections::{BTreeMap, BTreeSet};

pub const DEFAULT_LABEL_THRESHOLD: f64 = 0.2;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "love", "loved", "fast", "quick", "durable", "comfortable",
    "perfect", "happy", "recommend", "amazing", "helpful", "friendly", "beautiful", "sturdy",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "poor", "late", "slow", "broken", "broke", "damaged", "expensive", "overpriced",
    "confusing", "disappointed", "disappointing", "terrible", "awful", "worst", "rude",
    "missing", "wrong", "flimsy", "defective",
];

const NEGATORS: &[&str] = &["not", "never", "no", "isn't", "wasn't", "don't", "didn't", "doesn't"];

// How many preceding tokens a negator may sit before the word it flips.
const NEGATION_WINDOW: usize = 2;

const TOPIC_KEYWORDS: &[(FeedbackCategory, &[&str])] = &[
    (
        FeedbackCategory::Shipping,
        &["shipping", "shipped", "delivery", "delivered", "arrived", "arrival", "late", "courier"],
    ),
    (
        FeedbackCategory::Packaging,
        &["packaging", "package", "box", "packed", "wrapped"],
    ),
    (
        FeedbackCategory::Pricing,
        &["price", "priced", "expensive", "overpriced", "cost", "value", "discount", "cheap"],
    ),
    (
        FeedbackCategory::Quality,
        &["quality", "durable", "broke", "broken", "flimsy", "sturdy", "material", "defective"],
    ),
    (
        FeedbackCategory::Sizing,
        &["size", "sizing", "fit", "fits", "small", "large", "tight", "loose"],
    ),
    (
        FeedbackCategory::Service,
        &["service", "support", "seller", "response", "responded", "refund", "rude", "helpful"],
    ),
];

pub fn suggestion_for(category: FeedbackCategory) -> &'static str {
    match category {
        FeedbackCategory::Shipping => {
            "Late shipping is a common complaint. Consider faster shipping options or clearer delivery estimates."
        }
        FeedbackCategory::Packaging => "Upgrade packaging so items arrive undamaged.",
        FeedbackCategory::Pricing => {
            "Feedback mentions price. Consider targeted discounts for high-competition items."
        }
        FeedbackCategory::Quality => "Review quality checks for the products named in complaints.",
        FeedbackCategory::Sizing => {
            "Clarify material and sizing details for top selling products to reduce confusion."
        }
        FeedbackCategory::Service => "Respond to negative reviews within 24 hours to show you care.",
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

/// Lexicon scoring of a single piece of customer feedback. The score is
/// `(positive - negative) / (positive + negative)` over polarity words, with
/// a nearby negator flipping a word's polarity.
pub fn analyze_feedback(text: &str, threshold: f64) -> FeedbackAnalysis {
    let tokens = tokenize(text);
    let mut positive = 0usize;
    let mut negative = 0usize;

    for (index, token) in tokens.iter().enumerate() {
        let polarity = if POSITIVE_WORDS.contains(&token.as_str()) {
            1
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            -1
        } else {
            continue;
        };

        let negated = tokens[index.saturating_sub(NEGATION_WINDOW)..index]
            .iter()
            .any(|t| NEGATORS.contains(&t.as_str()));

        if (polarity > 0) != negated {
            positive += 1;
        } else {
            negative += 1;
        }
    }

    let hits = positive + negative;
    let score = if hits == 0 {
        0.0
    } else {
        (positive as f64 - negative as f64) / hits as f64
    };

    let label = if score > threshold {
        SentimentLabel::Positive
    } else if score < -threshold {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    let categories: Vec<FeedbackCategory> = TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| tokens.iter().any(|t| keywords.contains(&t.as_str())))
        .map(|(category, _)| *category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let suggestions = if label == SentimentLabel::Positive {
        Vec::new()
    } else {
        categories
            .iter()
            .map(|c| suggestion_for(*c).to_string())
            .collect()
    };

    FeedbackAnalysis {
        label,
        score,
        categories,
        suggestions,
    }
}

pub fn summarize_feedback(entries: &[FeedbackEntry]) -> FeedbackSummary {
    let total = entries.len();
    if total == 0 {
        return FeedbackSummary {
            entry_count: 0,
            positive_percentage: 0.0,
            neutral_percentage: 0.0,
            negative_percentage: 0.0,
            avg_score: 0.0,
            top_categories: Vec::new(),
        };
    }

    let share = |label: SentimentLabel| {
        let count = entries.iter().filter(|e| e.label == label).count();
        round0(count as f64 / total as f64 * 100.0)
    };

    let mean = entries.iter().map(|e| e.score).sum::<f64>() / total as f64;

    let mut counts: BTreeMap<FeedbackCategory, usize> = BTreeMap::new();
    for category in entries.iter().flat_map(|e| e.categories.iter()) {
        *counts.entry(*category).or_insert(0) += 1;
    }
    let mut ranked: Vec<(FeedbackCategory, usize)> = counts.into_iter().collect();
    // Stable sort keeps category order among ties.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    FeedbackSummary {
        entry_count: total,
        positive_percentage: share(SentimentLabel::Positive),
        neutral_percentage: share(SentimentLabel::Neutral),
        negative_percentage: share(SentimentLabel::Negative),
        avg_score: round0(mean * 100.0),
        top_categories: ranked.into_iter().take(3).map(|(c, _)| c).collect(),
    }
}
