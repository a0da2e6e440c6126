// Crate-wide error type

use crate::source::AnalysisError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Invalid analysis result: {0}")]
    InvalidResult(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
