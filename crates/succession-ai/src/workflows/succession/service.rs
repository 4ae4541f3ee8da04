use serde::{Deserialize, Serialize};

use super::domain::{EmployeeProfile, RoleRequirements};
use super::gap_analysis::{GapAnalysisEngine, GapConfig, GapReport};
use super::segmentation::{
    EmployeeSegmentation, RatingThresholds, Segment, SegmentSummary, SegmentationEngine,
    ThresholdError,
};

/// Facade composing the two engines for the HTTP router and CLI.
///
/// Holds the validated default configuration; per-request overrides build
/// a throwaway engine so concurrent calls never observe a partial swap.
pub struct SuccessionService {
    segmentation: SegmentationEngine,
    gaps: GapAnalysisEngine,
}

impl SuccessionService {
    pub fn new(thresholds: RatingThresholds, gap_config: GapConfig) -> Result<Self, ThresholdError> {
        Ok(Self {
            segmentation: SegmentationEngine::new(thresholds)?,
            gaps: GapAnalysisEngine::new(gap_config),
        })
    }

    pub fn segment_single(
        &self,
        profile: &EmployeeProfile,
        thresholds: Option<RatingThresholds>,
    ) -> Result<EmployeeSegmentation, ThresholdError> {
        match thresholds {
            Some(overridden) => Ok(SegmentationEngine::new(overridden)?.segment(profile)),
            None => Ok(self.segmentation.segment(profile)),
        }
    }

    pub fn segment_batch(
        &self,
        profiles: &[EmployeeProfile],
        thresholds: Option<RatingThresholds>,
    ) -> Result<BatchSegmentation, ThresholdError> {
        let results = match thresholds {
            Some(overridden) => SegmentationEngine::new(overridden)?.segment_all(profiles),
            None => self.segmentation.segment_all(profiles),
        };
        let summary = SegmentSummary::from_results(&results);
        Ok(BatchSegmentation { results, summary })
    }

    pub fn analyze_gaps(
        &self,
        employee: &EmployeeProfile,
        role: &RoleRequirements,
        thresholds: Option<RatingThresholds>,
        margins: Option<GapConfig>,
    ) -> Result<GapAnalysisView, ThresholdError> {
        let segmentation = self.segment_single(employee, thresholds)?;
        let report = match margins {
            Some(config) => GapAnalysisEngine::new(config).analyze(employee, role),
            None => self.gaps.analyze(employee, role),
        };

        Ok(GapAnalysisView {
            current_segment: segmentation.segment,
            current_segment_description: segmentation.segment_description,
            report,
        })
    }
}

/// Batch classification plus the derived committee summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSegmentation {
    pub results: Vec<EmployeeSegmentation>,
    pub summary: SegmentSummary,
}

/// Gap report paired with the employee's current segment so the two can be
/// displayed side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysisView {
    pub current_segment: Segment,
    pub current_segment_description: String,
    #[serde(flatten)]
    pub report: GapReport,
}
