use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for employee records supplied by the profile store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub String);

/// Snapshot of an employee as supplied by the external profile provider.
///
/// Numeric fields default to zero when absent so loosely shaped upstream
/// payloads degrade to "no data" instead of failing deserialization. The
/// identity fields are carried for display only; the engines never branch
/// on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    pub employee_id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub performance_rating: f32,
    #[serde(default)]
    pub potential_rating: f32,
    #[serde(default)]
    pub assessment_scores: AssessmentScores,
    #[serde(default)]
    pub experience_years: f32,
    #[serde(default)]
    pub skills: BTreeSet<String>,
}

/// Assessment scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssessmentScores {
    pub technical: f32,
    pub communication: f32,
    pub leadership: f32,
}

/// Target role definition supplied by the role-catalog provider.
///
/// A zero requirement means the role does not screen on that attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    pub role: String,
    #[serde(default)]
    pub required_skills: BTreeSet<String>,
    #[serde(default)]
    pub required_experience: f32,
    #[serde(default)]
    pub min_performance_rating: f32,
    #[serde(default)]
    pub min_potential_rating: f32,
    #[serde(default)]
    pub required_scores: AssessmentScores,
}
