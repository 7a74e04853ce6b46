//! Record of a completed step inside a multi-step bridge operation.
use chrono::Utc;
use serde::Serialize;

/// One external submission that already happened. Multi-step operations keep
/// these so a caller can see what is on-chain after a partial failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// Non-transaction result of the step, e.g. a computed hash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub completed_at: String,
}

impl StepRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tx_hash: None,
            output: None,
            completed_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_tx_hash(mut self, tx_hash: Option<String>) -> Self {
        self.tx_hash = tx_hash;
        self
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}
