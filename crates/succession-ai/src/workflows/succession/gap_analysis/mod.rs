mod config;
mod report;
mod rules;

pub use config::GapConfig;
pub use report::{GapReport, ReadinessLevel};
pub use rules::{AttributeGap, GapAttribute, GapStatus};

use tracing::debug;

use super::domain::{EmployeeProfile, RoleRequirements};
use report::{build_recommendations, readiness_for};
use rules::{attribute_gap, partition_skills, skill_match_percent};

/// Stateless scorer comparing an employee against a target role.
#[derive(Debug, Default)]
pub struct GapAnalysisEngine {
    config: GapConfig,
}

impl GapAnalysisEngine {
    pub fn new(config: GapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GapConfig {
        &self.config
    }

    pub fn analyze(&self, employee: &EmployeeProfile, role: &RoleRequirements) -> GapReport {
        let scores = &employee.assessment_scores;
        let required = &role.required_scores;

        let attribute_gaps = vec![
            attribute_gap(
                GapAttribute::Technical,
                scores.technical,
                required.technical,
                self.config.score_close_margin,
            ),
            attribute_gap(
                GapAttribute::Communication,
                scores.communication,
                required.communication,
                self.config.score_close_margin,
            ),
            attribute_gap(
                GapAttribute::Leadership,
                scores.leadership,
                required.leadership,
                self.config.score_close_margin,
            ),
            attribute_gap(
                GapAttribute::PerformanceRating,
                employee.performance_rating,
                role.min_performance_rating,
                self.config.rating_close_margin,
            ),
            attribute_gap(
                GapAttribute::PotentialRating,
                employee.potential_rating,
                role.min_potential_rating,
                self.config.rating_close_margin,
            ),
            attribute_gap(
                GapAttribute::ExperienceYears,
                employee.experience_years,
                role.required_experience,
                self.config.experience_close_margin,
            ),
        ];

        let (matched_skills, missing_skills) =
            partition_skills(&employee.skills, &role.required_skills);
        let overall_skill_match =
            skill_match_percent(matched_skills.len(), role.required_skills.len());

        let mut recommendations = build_recommendations(&missing_skills, &attribute_gaps);
        let readiness = readiness_for(&recommendations);
        if recommendations.is_empty() {
            recommendations.push("Continue current development".to_string());
        }

        debug!(
            employee = %employee.employee_id.0,
            target_role = %role.role,
            skill_match = overall_skill_match,
            readiness = readiness.label(),
            "gap analysis computed"
        );

        GapReport {
            employee_name: employee.name.clone(),
            target_role: role.role.clone(),
            attribute_gaps,
            matched_skills,
            missing_skills,
            overall_skill_match,
            recommendations,
            readiness,
        }
    }
}
