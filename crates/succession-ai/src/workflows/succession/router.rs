use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EmployeeProfile, RoleRequirements};
use super::gap_analysis::GapConfig;
use super::segmentation::RatingThresholds;
use super::service::SuccessionService;

/// Router builder exposing the segmentation and gap-analysis endpoints.
pub fn succession_router(service: Arc<SuccessionService>) -> Router {
    Router::new()
        .route("/api/v1/segmentation/single", post(segment_single_handler))
        .route("/api/v1/segmentation/batch", post(segment_batch_handler))
        .route("/api/v1/gap-analysis", post(gap_analysis_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct SegmentSingleRequest {
    pub employee: EmployeeProfile,
    #[serde(default)]
    pub thresholds: Option<RatingThresholds>,
}

#[derive(Debug, Deserialize)]
pub struct SegmentBatchRequest {
    pub employees: Vec<EmployeeProfile>,
    #[serde(default)]
    pub thresholds: Option<RatingThresholds>,
}

#[derive(Debug, Deserialize)]
pub struct GapAnalysisRequest {
    pub employee: EmployeeProfile,
    pub role: RoleRequirements,
    #[serde(default)]
    pub thresholds: Option<RatingThresholds>,
    #[serde(default)]
    pub margins: Option<GapConfig>,
}

pub(crate) async fn segment_single_handler(
    State(service): State<Arc<SuccessionService>>,
    axum::Json(request): axum::Json<SegmentSingleRequest>,
) -> Response {
    match service.segment_single(&request.employee, request.thresholds) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => threshold_rejection(error),
    }
}

pub(crate) async fn segment_batch_handler(
    State(service): State<Arc<SuccessionService>>,
    axum::Json(request): axum::Json<SegmentBatchRequest>,
) -> Response {
    match service.segment_batch(&request.employees, request.thresholds) {
        Ok(batch) => (StatusCode::OK, axum::Json(batch)).into_response(),
        Err(error) => threshold_rejection(error),
    }
}

pub(crate) async fn gap_analysis_handler(
    State(service): State<Arc<SuccessionService>>,
    axum::Json(request): axum::Json<GapAnalysisRequest>,
) -> Response {
    match service.analyze_gaps(
        &request.employee,
        &request.role,
        request.thresholds,
        request.margins,
    ) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => threshold_rejection(error),
    }
}

fn threshold_rejection(error: super::segmentation::ThresholdError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
