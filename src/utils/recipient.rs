//! Encoding of cross-chain recipients as the byte strings the bridge
//! contracts expect.
use crate::models::ParseError;

const SUI_ADDRESS_HEX_LEN: usize = 64;
const EVM_ADDRESS_HEX_LEN: usize = 40;

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// Left-pads a Sui address to the 32-byte form passed to `bridgeToSui`.
///
/// Short addresses such as `0x2` are legal on Sui and expand to
/// `0x000…0002`.
pub fn sui_address_to_bytes32(address: &str) -> Result<String, ParseError> {
    let trimmed = address.trim();
    let hex_part = strip_hex_prefix(trimmed).to_ascii_lowercase();
    if hex_part.is_empty() || hex_part.len() > SUI_ADDRESS_HEX_LEN {
        return Err(ParseError::invalid_address(
            address,
            format!("expected 1 to {SUI_ADDRESS_HEX_LEN} hex digits"),
        ));
    }
    let padded = format!("{hex_part:0>SUI_ADDRESS_HEX_LEN$}");
    hex::decode(&padded).map_err(|e| ParseError::invalid_address(address, e.to_string()))?;
    Ok(format!("0x{padded}"))
}

/// Normalizes an EVM address to the 20-byte form passed to Sui `lock`.
pub fn eth_address_to_bytes20(address: &str) -> Result<String, ParseError> {
    let trimmed = address.trim();
    let hex_part = strip_hex_prefix(trimmed).to_ascii_lowercase();
    if hex_part.len() != EVM_ADDRESS_HEX_LEN {
        return Err(ParseError::invalid_address(
            address,
            format!("expected {EVM_ADDRESS_HEX_LEN} hex digits"),
        ));
    }
    hex::decode(&hex_part).map_err(|e| ParseError::invalid_address(address, e.to_string()))?;
    Ok(format!("0x{hex_part}"))
}
