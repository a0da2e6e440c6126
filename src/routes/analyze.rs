//! POST /api/analyze
//!
//! Demo analysis service: same wire contract the analysis client speaks,
//! answered by whichever source the server was configured with.

use axum::{extract::State, routing::post, Json, Router};
use tracing::info;
use validator::Validate;

use super::error::ApiError;
use crate::models::{AnalysisResult, AnalyzeRequest, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .with_state(state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    request.validate()?;

    info!(
        source = state.source.name(),
        idea_chars = request.idea.chars().count(),
        "Analysis request received"
    );

    let result = state.source.analyze(request.idea.trim()).await?;
    Ok(Json(result))
}
