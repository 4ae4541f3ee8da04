use serde::{Deserialize, Serialize};

use super::thresholds::{AxisThresholds, RatingThresholds};

/// Band a rating falls into after comparison against the axis cut points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBand {
    Low,
    Medium,
    High,
}

impl RatingBand {
    /// Lower transition is low-inclusive, upper transition high-inclusive:
    /// a value equal to a cut point belongs to the band that cut point
    /// starts.
    pub fn for_value(value: f32, axis: AxisThresholds) -> Self {
        if value < axis.low {
            RatingBand::Low
        } else if value >= axis.high {
            RatingBand::High
        } else {
            RatingBand::Medium
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingBand::Low => "Low",
            RatingBand::Medium => "Medium",
            RatingBand::High => "High",
        }
    }
}

/// One cell of the nine-box matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    #[serde(rename = "Enigma")]
    Enigma,
    #[serde(rename = "Emerging Talent")]
    EmergingTalent,
    #[serde(rename = "Star")]
    Star,
    #[serde(rename = "Inconsistent Player")]
    InconsistentPlayer,
    #[serde(rename = "Core Contributor")]
    CoreContributor,
    #[serde(rename = "Consistent Performer")]
    ConsistentPerformer,
    #[serde(rename = "Risk Zone")]
    RiskZone,
    #[serde(rename = "Diligent Worker")]
    DiligentWorker,
    #[serde(rename = "Solid Performer")]
    SolidPerformer,
}

impl Segment {
    /// Fixed lookup from the banded pair to the matrix cell.
    pub fn for_bands(performance: RatingBand, potential: RatingBand) -> Self {
        use RatingBand::{High, Low, Medium};

        match (potential, performance) {
            (High, Low) => Segment::Enigma,
            (High, Medium) => Segment::EmergingTalent,
            (High, High) => Segment::Star,
            (Medium, Low) => Segment::InconsistentPlayer,
            (Medium, Medium) => Segment::CoreContributor,
            (Medium, High) => Segment::ConsistentPerformer,
            (Low, Low) => Segment::RiskZone,
            (Low, Medium) => Segment::DiligentWorker,
            (Low, High) => Segment::SolidPerformer,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Segment::Enigma => "Enigma",
            Segment::EmergingTalent => "Emerging Talent",
            Segment::Star => "Star",
            Segment::InconsistentPlayer => "Inconsistent Player",
            Segment::CoreContributor => "Core Contributor",
            Segment::ConsistentPerformer => "Consistent Performer",
            Segment::RiskZone => "Risk Zone",
            Segment::DiligentWorker => "Diligent Worker",
            Segment::SolidPerformer => "Solid Performer",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Segment::Enigma => {
                "High potential but underperforming. May need coaching, role adjustment, or support."
            }
            Segment::EmergingTalent => {
                "Rising stars with high potential. Invest in development and growth opportunities."
            }
            Segment::Star => "Top talent. Retain, promote, and use as mentors. Future leaders.",
            Segment::InconsistentPlayer => {
                "Inconsistent performance with moderate potential. Needs performance improvement plan."
            }
            Segment::CoreContributor => {
                "Reliable performers forming the backbone of the organization. Provide stability."
            }
            Segment::ConsistentPerformer => {
                "Strong current performers. Recognize contributions and maintain engagement."
            }
            Segment::RiskZone => {
                "Poor performance and limited potential. Consider performance improvement or exit."
            }
            Segment::DiligentWorker => {
                "Steady workers with limited growth potential. Keep engaged in current role."
            }
            Segment::SolidPerformer => {
                "High performers happy in current role. Valuable individual contributors."
            }
        }
    }

    /// Candidates for leadership fast-tracking during committee review.
    pub fn is_fast_track(&self) -> bool {
        matches!(self, Segment::Star | Segment::EmergingTalent)
    }

    /// Segments flagged for performance-improvement attention.
    pub fn needs_development(&self) -> bool {
        matches!(self, Segment::RiskZone | Segment::InconsistentPlayer)
    }
}

/// Classify one performance/potential pair. Pure and total over finite
/// inputs; NaN rejection is the caller's concern.
pub fn classify(performance: f32, potential: f32, thresholds: &RatingThresholds) -> Segment {
    let performance_band = RatingBand::for_value(performance, thresholds.performance);
    let potential_band = RatingBand::for_value(potential, thresholds.potential);
    Segment::for_bands(performance_band, potential_band)
}
