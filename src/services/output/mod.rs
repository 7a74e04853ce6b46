//! Extraction of transaction identifiers from CLI output.
//!
//! Chain CLIs print human-oriented text. Each tool (and output-format
//! version) gets its own [`ReceiptExtractor`], so a change in one tool's
//! output only touches one adapter.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ChainKind, TransactionReceipt};

static TX_HASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"transactionHash[ \t]*:?[ \t]+(0x[0-9a-fA-F]{64})\b").unwrap());

static DIGEST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Transaction Digest:[ \t]*([A-Za-z0-9]+)").unwrap());

/// Finds the `transactionHash` field printed by `cast send` and returns the
/// `0x`-prefixed 64-hex-digit hash that follows it.
pub fn extract_tx_hash(text: &str) -> Option<String> {
    TX_HASH
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Finds the `Transaction Digest:` line printed by `sui client call`.
pub fn extract_digest(text: &str) -> Option<String> {
    DIGEST.captures(text).map(|caps| caps[1].to_string())
}

/// Turns raw output of a submitting command into a [`TransactionReceipt`].
pub trait ReceiptExtractor: Send + Sync {
    fn chain(&self) -> ChainKind;

    fn extract(&self, raw: &str) -> TransactionReceipt;
}

/// Reads the default (non-JSON) receipt table printed by `cast send`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CastReceiptExtractor;

impl ReceiptExtractor for CastReceiptExtractor {
    fn chain(&self) -> ChainKind {
        ChainKind::Evm
    }

    fn extract(&self, raw: &str) -> TransactionReceipt {
        TransactionReceipt {
            chain: self.chain(),
            tx_hash: extract_tx_hash(raw),
            digest: None,
            raw: raw.to_string(),
        }
    }
}

/// Reads the human-readable transaction block printed by `sui client call`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuiReceiptExtractor;

impl ReceiptExtractor for SuiReceiptExtractor {
    fn chain(&self) -> ChainKind {
        ChainKind::Sui
    }

    fn extract(&self, raw: &str) -> TransactionReceipt {
        TransactionReceipt {
            chain: self.chain(),
            tx_hash: None,
            digest: extract_digest(raw),
            raw: raw.to_string(),
        }
    }
}
