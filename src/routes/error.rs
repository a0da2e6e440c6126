use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;
use validator::ValidationErrors;

use crate::models::ErrorBody;
use crate::source::AnalysisError;
use crate::types::AppError;

/// Handler error, rendered as `{"detail": "..."}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        warn!(error = %err, "Request failed");
        match err {
            AppError::Analysis(AnalysisError::Service(detail)) => {
                Self::new(StatusCode::BAD_GATEWAY, detail)
            }
            AppError::Analysis(e @ AnalysisError::Connection) => {
                Self::new(StatusCode::BAD_GATEWAY, e.to_string())
            }
            AppError::InvalidRequest(detail) => Self::new(StatusCode::BAD_REQUEST, detail),
            other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let detail = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_detail_passes_through() {
        let err: ApiError = AppError::from(AnalysisError::Service("Agent crashed".into())).into();
        assert_eq!(err.status, StatusCode::BAD_GATEWAY);
        assert_eq!(err.detail, "Agent crashed");
    }

    #[test]
    fn test_internal_is_500() {
        let err: ApiError = AppError::Internal("boom".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
