//! Scan analysis route handler.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use phishai_core::{AnalysisResult, AnalyzeError, ScanBody};
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/phish/analyze`
///
/// An unreadable body is treated like an empty one and reported as
/// `invalid_input`.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<ScanBody>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let body = body.map(|Json(b)| b).unwrap_or_default();

    match state.proxy.analyze(&body).await {
        Ok(result) => Ok(Json(result)),
        Err(err) => {
            match &err {
                AnalyzeError::Validation(e) => debug!(error = %e, "Rejected scan request"),
                AnalyzeError::Upstream(e) => error!(error = %e, reason = e.reason(), "Analysis failed"),
            }
            Err(ApiError::from_analyze(&err, state.mode))
        }
    }
}
