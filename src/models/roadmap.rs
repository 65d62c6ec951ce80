use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MilestoneCategory {
    Listings,
    CustomerService,
    Marketing,
    Pricing,
}

impl MilestoneCategory {
    pub const ALL: [MilestoneCategory; 4] = [
        MilestoneCategory::Listings,
        MilestoneCategory::CustomerService,
        MilestoneCategory::Marketing,
        MilestoneCategory::Pricing,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: MilestoneCategory,
    pub difficulty: Difficulty,
    pub estimated_impact: Impact,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadmapProgress {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestoneGroup {
    pub category: MilestoneCategory,
    pub milestones: Vec<Milestone>,
}

/// Expected gains shown next to the roadmap before improvements are applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedImpact {
    pub visibility_points_low: f64,
    pub visibility_points_high: f64,
    pub conversion_percent_low: f64,
    pub conversion_percent_high: f64,
}
