use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::EmployeeSegmentation;

/// Head counts and committee shortlists for a batch of segmentations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub total_employees: usize,
    pub segment_counts: BTreeMap<String, usize>,
    /// Names in Star or Emerging Talent, in input order.
    pub fast_track: Vec<String>,
    /// Names in Risk Zone or Inconsistent Player, in input order.
    pub development_needed: Vec<String>,
}

impl SegmentSummary {
    pub fn from_results(results: &[EmployeeSegmentation]) -> Self {
        let mut summary = Self {
            total_employees: results.len(),
            ..Self::default()
        };

        for result in results {
            *summary
                .segment_counts
                .entry(result.segment.label().to_string())
                .or_insert(0) += 1;

            if result.segment.is_fast_track() {
                summary.fast_track.push(result.employee_name.clone());
            }
            if result.segment.needs_development() {
                summary.development_needed.push(result.employee_name.clone());
            }
        }

        summary
    }
}
