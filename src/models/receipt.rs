use serde::Serialize;

use super::ChainKind;

/// Identifiers scraped from the output of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub chain: ChainKind,
    /// Present for the EVM chain when the hash could be found in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    /// Present for Sui when the digest could be found in the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    /// Untouched CLI output, kept for audit.
    pub raw: String,
}

impl TransactionReceipt {
    /// The identifier that matters for the receipt's chain.
    pub fn identifier(&self) -> Option<&str> {
        match self.chain {
            ChainKind::Evm => self.tx_hash.as_deref(),
            ChainKind::Sui => self.digest.as_deref(),
        }
    }
}
