mod grid;
mod summary;
mod thresholds;

pub use grid::{classify, RatingBand, Segment};
pub use summary::SegmentSummary;
pub use thresholds::{AxisThresholds, RatingThresholds, ThresholdError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::{EmployeeId, EmployeeProfile};

/// Stateless classifier applying validated cut points to employee ratings.
#[derive(Debug)]
pub struct SegmentationEngine {
    thresholds: RatingThresholds,
}

impl SegmentationEngine {
    /// Build an engine, rejecting inverted cut points up front so every
    /// later classification is infallible.
    pub fn new(thresholds: RatingThresholds) -> Result<Self, ThresholdError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }

    pub fn segment(&self, profile: &EmployeeProfile) -> EmployeeSegmentation {
        let performance_band =
            RatingBand::for_value(profile.performance_rating, self.thresholds.performance);
        let potential_band =
            RatingBand::for_value(profile.potential_rating, self.thresholds.potential);
        let segment = Segment::for_bands(performance_band, potential_band);

        debug!(
            employee = %profile.employee_id.0,
            performance = profile.performance_rating,
            potential = profile.potential_rating,
            segment = segment.label(),
            "employee segmented"
        );

        EmployeeSegmentation {
            employee_id: profile.employee_id.clone(),
            employee_name: profile.name.clone(),
            performance_rating: profile.performance_rating,
            potential_rating: profile.potential_rating,
            performance_band,
            potential_band,
            segment,
            segment_description: segment.description().to_string(),
        }
    }

    pub fn segment_all(&self, profiles: &[EmployeeProfile]) -> Vec<EmployeeSegmentation> {
        profiles.iter().map(|profile| self.segment(profile)).collect()
    }
}

/// Classification outcome for one employee, computed fresh per call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSegmentation {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub performance_rating: f32,
    pub potential_rating: f32,
    pub performance_band: RatingBand,
    pub potential_band: RatingBand,
    pub segment: Segment,
    pub segment_description: String,
}
