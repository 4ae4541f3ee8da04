//! Succession planning workflow: nine-box segmentation and role gap scoring.
//!
//! The segmentation and gap-analysis engines are pure and stateless; they
//! own no storage and perform no I/O. The service facade composes them for
//! the HTTP router, including per-request threshold overrides, so hosts can
//! swap cut points wholesale without mutating a shared engine.

pub mod domain;
pub mod gap_analysis;
pub mod router;
pub mod segmentation;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{AssessmentScores, EmployeeId, EmployeeProfile, RoleRequirements};
pub use gap_analysis::{
    AttributeGap, GapAnalysisEngine, GapAttribute, GapConfig, GapReport, GapStatus, ReadinessLevel,
};
pub use router::succession_router;
pub use segmentation::{
    classify, AxisThresholds, EmployeeSegmentation, RatingBand, RatingThresholds, Segment,
    SegmentSummary, SegmentationEngine, ThresholdError,
};
pub use service::{BatchSegmentation, GapAnalysisView, SuccessionService};
