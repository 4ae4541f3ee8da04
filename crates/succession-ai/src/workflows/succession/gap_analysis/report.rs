use serde::{Deserialize, Serialize};

use super::rules::{AttributeGap, GapAttribute, GapStatus};

/// Coarse readiness classification derived from the recommendation count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadinessLevel {
    Ready,
    Developing,
    #[serde(rename = "Not Ready")]
    NotReady,
}

impl ReadinessLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ReadinessLevel::Ready => "Ready",
            ReadinessLevel::Developing => "Developing",
            ReadinessLevel::NotReady => "Not Ready",
        }
    }
}

/// Structured gap-analysis outcome for one employee against one role.
///
/// Deterministic over its inputs; suitable as-is for the presentation
/// layer or as context for an external recommendation generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub employee_name: String,
    pub target_role: String,
    pub attribute_gaps: Vec<AttributeGap>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub overall_skill_match: u8,
    pub recommendations: Vec<String>,
    pub readiness: ReadinessLevel,
}

impl GapReport {
    pub fn overall_skill_match_label(&self) -> String {
        format!("{}%", self.overall_skill_match)
    }

    pub fn attribute(&self, attribute: GapAttribute) -> Option<&AttributeGap> {
        self.attribute_gaps
            .iter()
            .find(|gap| gap.attribute == attribute)
    }
}

/// Templated advisory strings for the rule-based fallback path: one line
/// for missing skills, then one per Gap attribute ordered by descending
/// relative shortfall.
pub(crate) fn build_recommendations(missing: &[String], gaps: &[AttributeGap]) -> Vec<String> {
    let mut recommendations = Vec::new();

    if !missing.is_empty() {
        let named: Vec<&str> = missing.iter().take(3).map(String::as_str).collect();
        recommendations.push(format!("Develop skills: {}", named.join(", ")));
    }

    let mut gapped: Vec<&AttributeGap> = gaps
        .iter()
        .filter(|gap| gap.status == GapStatus::Gap)
        .collect();
    // Ascending match percent is descending shortfall; stable sort keeps
    // declaration order on ties.
    gapped.sort_by_key(|gap| gap.match_percent);

    for gap in gapped {
        recommendations.push(format!(
            "Improve {}: current {}, required {}",
            gap.attribute.label(),
            gap.employee,
            gap.required
        ));
    }

    recommendations
}

pub(crate) fn readiness_for(recommendations: &[String]) -> ReadinessLevel {
    match recommendations.len() {
        0 => ReadinessLevel::Ready,
        1..=2 => ReadinessLevel::Developing,
        _ => ReadinessLevel::NotReady,
    }
}
