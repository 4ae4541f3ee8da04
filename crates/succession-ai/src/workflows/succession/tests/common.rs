use std::collections::BTreeSet;

use crate::workflows::succession::domain::{
    AssessmentScores, EmployeeId, EmployeeProfile, RoleRequirements,
};
use crate::workflows::succession::gap_analysis::{GapAnalysisEngine, GapConfig};
use crate::workflows::succession::segmentation::{RatingThresholds, SegmentationEngine};

pub(super) fn skills(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub(super) fn profile(name: &str, performance: f32, potential: f32) -> EmployeeProfile {
    EmployeeProfile {
        employee_id: EmployeeId(format!("emp-{}", name.to_lowercase())),
        name: name.to_string(),
        role: "Software Engineer".to_string(),
        department: "Engineering".to_string(),
        performance_rating: performance,
        potential_rating: potential,
        assessment_scores: AssessmentScores {
            technical: 80.0,
            communication: 75.0,
            leadership: 70.0,
        },
        experience_years: 6.0,
        skills: skills(&["Python", "SQL"]),
    }
}

pub(super) fn engineering_manager_role() -> RoleRequirements {
    RoleRequirements {
        role: "Engineering Manager".to_string(),
        required_skills: skills(&["Python", "Leadership"]),
        required_experience: 5.0,
        min_performance_rating: 4.0,
        min_potential_rating: 4.0,
        required_scores: AssessmentScores {
            technical: 75.0,
            communication: 75.0,
            leadership: 70.0,
        },
    }
}

pub(super) fn segmentation_engine() -> SegmentationEngine {
    SegmentationEngine::new(RatingThresholds::default()).expect("default thresholds are valid")
}

pub(super) fn gap_engine() -> GapAnalysisEngine {
    GapAnalysisEngine::new(GapConfig::default())
}
