use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::BridgeError;
use crate::models::{ApiResponse, StepRecord};

/// Error returned from controllers. Every variant renders as the
/// `{ok: false, error}` envelope with a non-success status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    CommandFailed(String),

    #[error("{message}")]
    PartialFailure {
        message: String,
        completed_steps: Vec<StepRecord>,
    },
}

impl From<BridgeError> for ApiError {
    fn from(error: BridgeError) -> Self {
        match error {
            BridgeError::Config(_) | BridgeError::Parse(_) => {
                ApiError::BadRequest(error.to_string())
            }
            BridgeError::Command(err) => ApiError::CommandFailed(err.to_string()),
            BridgeError::PartialFailure {
                step,
                completed,
                source,
            } => ApiError::PartialFailure {
                message: format!(
                    "Step '{step}' failed after {} completed step(s): {source}",
                    completed.len()
                ),
                completed_steps: completed,
            },
            BridgeError::InvalidSetting(msg) | BridgeError::Internal(msg) => {
                ApiError::InternalError(msg)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InternalError(_)
            | ApiError::CommandFailed(_)
            | ApiError::PartialFailure { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::PartialFailure {
                message,
                completed_steps,
            } => ApiResponse::<()>::partial_failure(message.clone(), completed_steps.clone()),
            other => ApiResponse::<()>::error(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
