use serde::{Deserialize, Serialize};

/// Cut points splitting one rating axis into Low / Medium / High bands.
///
/// `low == high` is accepted and collapses the Medium band to empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisThresholds {
    pub low: f32,
    pub high: f32,
}

impl AxisThresholds {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    fn validate(&self, axis: &'static str) -> Result<(), ThresholdError> {
        if self.low > self.high {
            return Err(ThresholdError::Inverted {
                axis,
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}

impl Default for AxisThresholds {
    fn default() -> Self {
        Self {
            low: 3.5,
            high: 4.0,
        }
    }
}

/// Cut points for both nine-box axes.
///
/// Treated as an immutable value for the duration of a classification
/// batch; hosts replace the whole struct rather than editing fields so an
/// in-flight classification never observes a torn threshold set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingThresholds {
    pub performance: AxisThresholds,
    pub potential: AxisThresholds,
}

impl RatingThresholds {
    /// Apply the same cut points to both axes, as the reference defaults do.
    pub fn symmetric(low: f32, high: f32) -> Self {
        Self {
            performance: AxisThresholds::new(low, high),
            potential: AxisThresholds::new(low, high),
        }
    }

    pub fn validate(&self) -> Result<(), ThresholdError> {
        self.performance.validate("performance")?;
        self.potential.validate("potential")
    }
}

/// Raised at configuration time; classification itself never fails.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ThresholdError {
    #[error("{axis} thresholds are inverted: low {low} exceeds high {high}")]
    Inverted {
        axis: &'static str,
        low: f32,
        high: f32,
    },
}
