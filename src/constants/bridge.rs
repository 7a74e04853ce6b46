//! Default constants for the IBT bridge contracts and their CLIs.

// === EVM side (driven through `cast`) ===
pub const DEFAULT_CAST_BIN: &str = "cast";
/// Subdirectory of the repository holding the EVM contracts project.
pub const DEFAULT_ETH_WORKDIR: &str = "eth_ibt";
pub const EVM_TOKEN_DECIMALS: u8 = 18;

pub const SIG_BALANCE_OF: &str = "balanceOf(address)(uint256)";
pub const SIG_APPROVE: &str = "approve(address,uint256)(bool)";
pub const SIG_BRIDGE_TO_SUI: &str = "bridgeToSui(uint256,bytes)";
pub const SIG_MINT_FROM_SUI: &str = "mintFromSui(address,uint256,bytes32)";

// === Sui side (driven through `sui client`) ===
pub const DEFAULT_SUI_BIN: &str = "sui";
pub const DEFAULT_SUI_MODULE: &str = "ibt";
pub const SUI_TOKEN_DECIMALS: u8 = 9;
/// Gas budget for init_bridge, mint and release calls (MIST).
pub const DEFAULT_SUI_GAS_BUDGET: u64 = 20_000_000;
/// Lock consumes a coin object and needs a larger budget (MIST).
pub const DEFAULT_SUI_LOCK_GAS_BUDGET: u64 = 40_000_000;

pub const SUI_FN_INIT_BRIDGE: &str = "init_bridge";
pub const SUI_FN_MINT: &str = "mint";
pub const SUI_FN_LOCK: &str = "lock";
pub const SUI_FN_RELEASE: &str = "release";

/// Coin struct name published by the IBT Move module.
pub const IBT_COIN_STRUCT: &str = "IBT";

// === Operation step labels returned to callers ===
pub const STEP_ETH_TO_SUI_SENT: &str = "ETH_TO_SUI_SENT";
pub const STEP_MINTED_ON_ETH: &str = "MINTED_ON_ETH";
pub const STEP_SUI_BRIDGE_INIT: &str = "SUI_BRIDGE_INIT";
pub const STEP_SUI_MINT_SENT: &str = "SUI_MINT_SENT";
pub const STEP_SUI_LOCK_SENT: &str = "SUI_LOCK_SENT";
pub const STEP_SUI_RELEASE_SENT: &str = "SUI_RELEASE_SENT";
