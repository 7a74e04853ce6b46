//! Request bodies for bridge operations.
//!
//! Every field is optional at the serde level so that a missing value is
//! reported as a configuration error naming the field, instead of a generic
//! JSON error.
use serde::Deserialize;

use crate::utils::deserialize_optional_amount_text;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthBalanceRequest {
    #[serde(default)]
    pub address: Option<String>,
}

/// Burn on the EVM side and emit the event the Sui mint is based on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeToSuiRequest {
    #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
    pub amount_wei: Option<String>,
    /// Sui recipient; short addresses are padded to 32 bytes.
    #[serde(default)]
    pub sui_recipient_bytes: Option<String>,
}

/// Mint on the EVM side against a Sui lock digest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintFromSuiRequest {
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
    pub amount_wei: Option<String>,
    #[serde(default)]
    pub sui_digest: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitBridgeRequest {
    /// Relayer address stored in the bridge object. Defaults to the active
    /// Sui CLI identity.
    #[serde(default)]
    pub relayer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiMintRequest {
    #[serde(default)]
    pub cap_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
    pub amount_u64: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiLockRequest {
    #[serde(default)]
    pub bridge_object_id: Option<String>,
    #[serde(default)]
    pub coin_object_id: Option<String>,
    #[serde(default)]
    pub eth_recipient_bytes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiReleaseRequest {
    #[serde(default)]
    pub bridge_object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
    pub amount_u64: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
}

/// Query string for object lookups; no owner means the active identity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerQuery {
    #[serde(default)]
    pub owner: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_fields() {
        let req: SuiLockRequest = serde_json::from_str(
            r#"{"bridgeObjectId":"0xb","coinObjectId":"0xc","ethRecipientBytes":"0xe"}"#,
        )
        .unwrap();
        assert_eq!(req.bridge_object_id.as_deref(), Some("0xb"));
        assert_eq!(req.coin_object_id.as_deref(), Some("0xc"));
        assert_eq!(req.eth_recipient_bytes.as_deref(), Some("0xe"));
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: SuiMintRequest = serde_json::from_str("{}").unwrap();
        assert!(req.cap_id.is_none());
        assert!(req.amount_u64.is_none());
        assert!(req.recipient.is_none());
    }

    #[test]
    fn test_numeric_amounts_are_kept_as_text() {
        let req: BridgeToSuiRequest =
            serde_json::from_str(r#"{"amountWei": 1000, "suiRecipientBytes": "0x2"}"#).unwrap();
        assert_eq!(req.amount_wei.as_deref(), Some("1000"));
    }
}
