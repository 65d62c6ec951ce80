use crate::analysis::rounding::{round1, round0};
use crate::models::roadmap::{Milestone, MilestoneCategory, MilestoneGroup, ProjectedImpact, RoadmapProgress};

pub fn completed_count(roadmap: &[Milestone]) -> usize {
    roadmap.iter().filter(|m| m.completed).count()
}

pub fn progress(roadmap: &[Milestone]) -> RoadmapProgress {
    let completed = completed_count(roadmap);
    let total = roadmap.len();
    let percentage = if total == 0 {
        0.0
    } else {
        round0(completed as f64 / total as f64 * 100.0)
    };

    RoadmapProgress {
        completed,
        total,
        percentage,
    }
}

/// Groups milestones by category, in category declaration order. Categories
/// without milestones are left out.
pub fn group_by_category(roadmap: &[Milestone]) -> Vec<MilestoneGroup> {
    MilestoneCategory::ALL
        .iter()
        .filter_map(|category| {
            let milestones: Vec<Milestone> = roadmap
                .iter()
                .filter(|m| m.category == *category)
                .cloned()
                .collect();
            (!milestones.is_empty()).then_some(MilestoneGroup {
                category: *category,
                milestones,
            })
        })
        .collect()
}

pub fn projected_impact(completed: usize) -> ProjectedImpact {
    let c = completed as f64;
    ProjectedImpact {
        visibility_points_low: round0(c * 1.5),
        visibility_points_high: round0(c * 2.0),
        conversion_percent_low: round1(c * 0.3),
        conversion_percent_high: round1(c * 0.5),
    }
}
