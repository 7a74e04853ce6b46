use thiserror::Error;

use super::{CommandError, ParseError};
use crate::models::StepRecord;

/// Errors produced by bridge operations before they reach the API boundary.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A required setting or request field was not supplied. Always raised
    /// before any external call is made.
    #[error("Missing required value: {0}")]
    Config(String),

    /// A setting was present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidSetting(String),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A later step of a multi-step operation failed. The steps in
    /// `completed` were already submitted and are not rolled back.
    #[error("Step '{step}' failed after {} completed step(s): {source}", completed.len())]
    PartialFailure {
        step: String,
        completed: Vec<StepRecord>,
        source: Box<BridgeError>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl BridgeError {
    pub fn missing(name: &str) -> Self {
        BridgeError::Config(name.to_string())
    }
}
