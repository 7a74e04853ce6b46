//! Amount and scale primitives shared by both chains.
//!
//! Amounts are always carried in the smallest unit of the chain they live on.
//! A [`Scale`] says how many of those smallest-unit digits make one whole token.
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Non-negative integer amount in a chain's smallest unit.
///
/// `U256` is the widest amount type either chain can hold on-chain; values
/// that do not fit are rejected at parse time instead of wrapping.
pub type AmountValue = alloy::primitives::U256;

/// Number of smallest-unit digits composing one whole token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scale(u8);

impl Scale {
    /// 18 decimals, the ERC-20 convention used by the EVM-side IBT token.
    pub const EVM: Scale = Scale(18);
    /// 9 decimals, the Sui coin convention.
    pub const SUI: Scale = Scale(9);

    pub const fn new(digits: u8) -> Self {
        Scale(digits)
    }

    pub const fn digits(self) -> usize {
        self.0 as usize
    }
}

/// The two ledgers the relayer moves value between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChainKind {
    /// Account-based chain driven through `cast`.
    Evm,
    /// Object-based chain driven through the `sui` client.
    Sui,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_scale_constants() {
        assert_eq!(Scale::EVM.digits(), 18);
        assert_eq!(Scale::SUI.digits(), 9);
        assert_eq!(Scale::new(6).digits(), 6);
    }

    #[test]
    fn test_chain_kind_round_trips_through_strings() {
        assert_eq!(ChainKind::Evm.to_string(), "evm");
        assert_eq!(ChainKind::from_str("sui").unwrap(), ChainKind::Sui);
        assert!(ChainKind::from_str("cosmos").is_err());
    }
}
