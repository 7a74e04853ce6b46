//! Success payloads of bridge operations. They are flattened into the
//! `{ok: true, ...}` envelope.
use serde::Serialize;

use crate::models::StepRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub repo: String,
    pub eth_rpc: Option<String>,
    pub eth_ibt: Option<String>,
    pub eth_bridge: Option<String>,
    pub sui_env: Option<String>,
    pub sui_package_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EthBalanceResponse {
    pub address: String,
    /// Raw balance in wei.
    pub balance: String,
    /// Balance in whole tokens.
    pub balance_eth: String,
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeToSuiResponse {
    pub step: String,
    pub tx_hash: Option<String>,
    pub approve_tx_hash: Option<String>,
    pub amount_wei: String,
    pub sui_recipient_bytes: String,
    /// Amount the relayer has to mint on Sui for this burn.
    pub sui_amount_u64: String,
    pub cast_output: String,
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MintFromSuiResponse {
    pub step: String,
    pub digest: String,
    pub digest_keccak: String,
    pub tx_hash: Option<String>,
    pub cast_output: String,
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitBridgeResponse {
    pub step: String,
    pub relayer: String,
    pub digest: Option<String>,
    pub raw: String,
}

/// Result of a single `sui client call`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiTxResponse {
    pub step: String,
    pub digest: Option<String>,
    pub raw: String,
}

/// "Not found" is a normal answer here, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestObjectResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
}

impl LatestObjectResponse {
    pub fn not_found() -> Self {
        Self {
            found: false,
            object_id: None,
            type_tag: None,
            version: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinBalanceResponse {
    /// `None` when the active CLI identity was queried.
    pub owner: Option<String>,
    pub coin_type: String,
    pub object_count: usize,
    /// Sum of all matching coin balances in MIST-style smallest units.
    pub balance: String,
    pub balance_display: String,
}
