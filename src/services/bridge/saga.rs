//! Bookkeeping for multi-step operations.
//!
//! Steps are recorded as they land. Nothing is rolled back; a failure after
//! the first step hands the recorded steps back to the caller.
use log::warn;

use crate::models::{BridgeError, StepRecord};

#[derive(Debug)]
pub struct SagaLog {
    operation: &'static str,
    completed: Vec<StepRecord>,
}

impl SagaLog {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            completed: Vec::new(),
        }
    }

    pub fn record(&mut self, step: StepRecord) {
        self.completed.push(step);
    }

    pub fn completed(&self) -> &[StepRecord] {
        &self.completed
    }

    /// Error for a failed `step`. Plain when nothing landed yet, a
    /// [`BridgeError::PartialFailure`] otherwise.
    pub fn fail(self, step: &str, error: impl Into<BridgeError>) -> BridgeError {
        let error = error.into();
        if self.completed.is_empty() {
            return error;
        }
        warn!(
            "{}: step '{}' failed after {:?} already landed, manual reconciliation needed",
            self.operation,
            step,
            self.completed.iter().map(|s| s.name.as_str()).collect::<Vec<_>>()
        );
        BridgeError::PartialFailure {
            step: step.to_string(),
            completed: self.completed,
            source: Box::new(error),
        }
    }

    pub fn into_steps(self) -> Vec<StepRecord> {
        self.completed
    }
}
