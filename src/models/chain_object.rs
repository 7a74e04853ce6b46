use serde::Serialize;

use super::AmountValue;

/// An owned object on the object-based chain, reduced to the fields the
/// relayer reasons about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainObjectRef {
    pub object_id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Bumped by the chain on every mutation of the object.
    pub version: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<AmountValue>,
}

impl ChainObjectRef {
    pub fn new(object_id: impl Into<String>, type_tag: impl Into<String>, version: u64) -> Self {
        Self {
            object_id: object_id.into(),
            type_tag: type_tag.into(),
            version,
            balance: None,
        }
    }

    pub fn with_balance(mut self, balance: AmountValue) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Case-insensitive comparison against a fully qualified type string.
    pub fn is_type(&self, type_tag: &str) -> bool {
        self.type_tag.trim().eq_ignore_ascii_case(type_tag.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_match_ignores_case_and_padding() {
        let obj = ChainObjectRef::new("0x1", "0x2::coin::Coin<0xAB::ibt::IBT>", 1);
        assert!(obj.is_type("0x2::coin::coin<0xab::ibt::ibt>"));
        assert!(obj.is_type(" 0x2::coin::Coin<0xAB::ibt::IBT> "));
        assert!(!obj.is_type("0x2::coin::Coin<0xab::ibt::IBTX>"));
    }
}
