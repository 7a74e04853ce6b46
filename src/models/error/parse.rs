use thiserror::Error;

/// A numeric or textual input did not match any recognized encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized amount encoding: '{0}'")]
    InvalidAmount(String),

    #[error("Amount '{value}' does not fit in {limit}")]
    Overflow { value: String, limit: &'static str },

    #[error("Amount '{value}' is below one {unit}")]
    BelowMinimum { value: String, unit: &'static str },

    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("Malformed object data: {0}")]
    InvalidObjectData(String),
}

impl ParseError {
    pub fn invalid_address(address: &str, reason: impl Into<String>) -> Self {
        ParseError::InvalidAddress {
            address: address.to_string(),
            reason: reason.into(),
        }
    }
}
