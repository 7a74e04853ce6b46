use serde::Serialize;

use super::StepRecord;

/// Envelope shared by every endpoint.
///
/// Success payloads are flattened next to `ok`, so a balance query answers
/// `{"ok": true, "address": ..., "balance": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "completedSteps", skip_serializing_if = "Option::is_none")]
    pub completed_steps: Option<Vec<StepRecord>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            completed_steps: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            completed_steps: None,
        }
    }

    /// Failure after some chain transactions already landed. The caller
    /// gets the completed steps so they can be reconciled by hand.
    pub fn partial_failure(message: impl Into<String>, completed: Vec<StepRecord>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(message.into()),
            completed_steps: Some(completed),
        }
    }
}
