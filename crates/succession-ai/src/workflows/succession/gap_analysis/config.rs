use serde::{Deserialize, Serialize};

/// Margins deciding when a shortfall still counts as "Close".
///
/// The observed deployments disagree on the exact cutoff, so it is carried
/// as configuration rather than a constant. One margin per attribute scale:
/// assessment scores run 0-100, ratings 0-5, experience in years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    pub score_close_margin: f32,
    pub rating_close_margin: f32,
    pub experience_close_margin: f32,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            score_close_margin: 5.0,
            rating_close_margin: 0.25,
            experience_close_margin: 1.0,
        }
    }
}
