use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Attributes compared between an employee and a target role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapAttribute {
    Technical,
    Communication,
    Leadership,
    PerformanceRating,
    PotentialRating,
    ExperienceYears,
}

impl GapAttribute {
    pub fn label(&self) -> &'static str {
        match self {
            GapAttribute::Technical => "technical score",
            GapAttribute::Communication => "communication score",
            GapAttribute::Leadership => "leadership score",
            GapAttribute::PerformanceRating => "performance rating",
            GapAttribute::PotentialRating => "potential rating",
            GapAttribute::ExperienceYears => "experience years",
        }
    }
}

/// Status tier for one attribute comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapStatus {
    Met,
    Close,
    Gap,
    #[serde(rename = "N/A")]
    NotApplicable,
}

/// Signed comparison of one attribute against the role requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGap {
    pub attribute: GapAttribute,
    pub employee: f32,
    pub required: f32,
    /// Signed delta, employee minus required.
    pub gap: f32,
    pub match_percent: u8,
    pub status: GapStatus,
}

/// Compare one attribute. A zero requirement means the role does not
/// screen on the attribute: no data on either side is N/A, any employee
/// value fully satisfies it.
pub(crate) fn attribute_gap(
    attribute: GapAttribute,
    employee: f32,
    required: f32,
    close_margin: f32,
) -> AttributeGap {
    if required == 0.0 {
        let (status, match_percent) = if employee == 0.0 {
            (GapStatus::NotApplicable, 0)
        } else {
            (GapStatus::Met, 100)
        };
        return AttributeGap {
            attribute,
            employee,
            required,
            gap: employee,
            match_percent,
            status,
        };
    }

    let diff = employee - required;
    let status = if diff >= 0.0 {
        GapStatus::Met
    } else if diff >= -close_margin {
        GapStatus::Close
    } else {
        GapStatus::Gap
    };
    let match_percent = ((employee / required).clamp(0.0, 1.0) * 100.0).round() as u8;

    AttributeGap {
        attribute,
        employee,
        required,
        gap: diff,
        match_percent,
        status,
    }
}

/// Partition the role's required skills by exact, case-sensitive presence
/// in the employee's skill set. The two halves always reunite to the
/// required set and never overlap.
pub(crate) fn partition_skills(
    employee: &BTreeSet<String>,
    required: &BTreeSet<String>,
) -> (Vec<String>, Vec<String>) {
    let matched = required.intersection(employee).cloned().collect();
    let missing = required.difference(employee).cloned().collect();
    (matched, missing)
}

pub(crate) fn skill_match_percent(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 100;
    }
    ((matched as f32 / required as f32) * 100.0).round() as u8
}
