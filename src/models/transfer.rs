//! A single cross-chain transfer as understood for the duration of one request.
use serde::Serialize;

use super::{AmountValue, ChainKind, ParseError, Scale};
use crate::utils::convert_scale;

/// What a caller is moving, in the source chain's smallest unit.
///
/// Never persisted: correlating a lock with its later mint is up to the
/// caller, who passes the lock digest back in as `source_digest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferIntent {
    pub source: ChainKind,
    pub destination: ChainKind,
    pub amount: AmountValue,
    pub recipient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_digest: Option<String>,
}

impl TransferIntent {
    pub fn new(
        source: ChainKind,
        destination: ChainKind,
        amount: AmountValue,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            source,
            destination,
            amount,
            recipient: recipient.into(),
            source_digest: None,
        }
    }

    pub fn with_source_digest(mut self, digest: impl Into<String>) -> Self {
        self.source_digest = Some(digest.into());
        self
    }

    /// The same value expressed in the destination chain's smallest unit.
    pub fn destination_amount(
        &self,
        source_scale: Scale,
        destination_scale: Scale,
    ) -> Result<AmountValue, ParseError> {
        convert_scale(self.amount, source_scale, destination_scale)
    }

    /// Part of the amount too small to exist on the destination chain.
    pub fn dust(&self, source_scale: Scale, destination_scale: Scale) -> Result<AmountValue, ParseError> {
        let there = self.destination_amount(source_scale, destination_scale)?;
        let back = convert_scale(there, destination_scale, source_scale)?;
        Ok(self.amount - back)
    }
}
