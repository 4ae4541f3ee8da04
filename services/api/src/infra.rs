use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use succession_ai::config::EngineDefaults;
use succession_ai::workflows::succession::{
    GapConfig, RatingThresholds, SuccessionService, ThresholdError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the service from the configured nine-box defaults. Inverted cut
/// points fail here, at startup, rather than per request.
pub(crate) fn build_service(defaults: &EngineDefaults) -> Result<SuccessionService, ThresholdError> {
    let thresholds = RatingThresholds::symmetric(defaults.ninebox_low, defaults.ninebox_high);
    SuccessionService::new(thresholds, GapConfig::default())
}
