//! Bridge configuration, resolved once at startup and read-only afterwards.
//!
//! Chain identifiers and signing keys are optional here: a relayer can run
//! with only one side configured. Operations check what they need before
//! touching any CLI and fail with a configuration error otherwise.
use std::{env, fmt, path::PathBuf, time::Duration};

use log::warn;

use crate::constants::{
    DEFAULT_CAST_BIN, DEFAULT_COMMAND_TIMEOUT_SECONDS, DEFAULT_DISPLAY_PRECISION,
    DEFAULT_ETH_WORKDIR, DEFAULT_SUI_BIN, DEFAULT_SUI_GAS_BUDGET, DEFAULT_SUI_LOCK_GAS_BUDGET,
    DEFAULT_SUI_MODULE, EVM_TOKEN_DECIMALS, SUI_TOKEN_DECIMALS,
};
use crate::models::{BridgeError, Scale};

#[derive(Clone)]
pub struct BridgeConfig {
    /// Working directory for Sui CLI calls.
    pub repo_root: PathBuf,
    /// Working directory for `cast` calls.
    pub eth_workdir: PathBuf,
    pub cast_bin: String,
    pub sui_bin: String,

    pub eth_rpc: Option<String>,
    pub eth_token_address: Option<String>,
    pub eth_bridge_address: Option<String>,
    pub eth_user_pk: Option<String>,
    pub eth_owner_pk: Option<String>,

    pub sui_package_id: Option<String>,
    pub sui_env: Option<String>,
    pub sui_module: String,
    pub sui_gas_budget: u64,
    pub sui_lock_gas_budget: u64,

    pub evm_scale: Scale,
    pub sui_scale: Scale,
    pub display_precision: usize,
    pub command_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        let repo_root = PathBuf::from(".");
        Self {
            eth_workdir: repo_root.join(DEFAULT_ETH_WORKDIR),
            repo_root,
            cast_bin: DEFAULT_CAST_BIN.to_string(),
            sui_bin: DEFAULT_SUI_BIN.to_string(),
            eth_rpc: None,
            eth_token_address: None,
            eth_bridge_address: None,
            eth_user_pk: None,
            eth_owner_pk: None,
            sui_package_id: None,
            sui_env: None,
            sui_module: DEFAULT_SUI_MODULE.to_string(),
            sui_gas_budget: DEFAULT_SUI_GAS_BUDGET,
            sui_lock_gas_budget: DEFAULT_SUI_LOCK_GAS_BUDGET,
            evm_scale: Scale::new(EVM_TOKEN_DECIMALS),
            sui_scale: Scale::new(SUI_TOKEN_DECIMALS),
            display_precision: DEFAULT_DISPLAY_PRECISION,
            command_timeout: Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECONDS),
        }
    }
}

/// Reads a variable, treating unset and blank the same way.
fn non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a numeric variable. Unparseable values fall back to `default`
/// with a warning instead of passing unnoticed.
fn parsed<T: std::str::FromStr + fmt::Display>(name: &str, default: T) -> T {
    match non_empty(name) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{name}={raw} is not a valid value, using default {default}");
            default
        }),
        None => default,
    }
}

impl BridgeConfig {
    pub fn from_env() -> Result<Self, BridgeError> {
        let defaults = BridgeConfig::default();
        let repo_root = non_empty("REPO_ROOT")
            .map(PathBuf::from)
            .or_else(|| env::current_dir().ok())
            .unwrap_or(defaults.repo_root);
        let eth_workdir = non_empty("ETH_WORKDIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| repo_root.join(DEFAULT_ETH_WORKDIR));

        let timeout_secs = parsed("COMMAND_TIMEOUT_SECONDS", DEFAULT_COMMAND_TIMEOUT_SECONDS);
        if timeout_secs == 0 {
            return Err(BridgeError::InvalidSetting(
                "COMMAND_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            repo_root,
            eth_workdir,
            cast_bin: non_empty("CAST_BIN").unwrap_or(defaults.cast_bin),
            sui_bin: non_empty("SUI_BIN").unwrap_or(defaults.sui_bin),
            eth_rpc: non_empty("ETH_RPC"),
            eth_token_address: non_empty("ETH_IBT_ADDRESS"),
            eth_bridge_address: non_empty("ETH_BRIDGE_ADDRESS"),
            eth_user_pk: non_empty("ETH_USER_PK"),
            eth_owner_pk: non_empty("ETH_OWNER_PK"),
            sui_package_id: non_empty("SUI_PACKAGE_ID"),
            sui_env: non_empty("SUI_ENV"),
            sui_module: non_empty("SUI_MODULE").unwrap_or(defaults.sui_module),
            sui_gas_budget: parsed("SUI_GAS_BUDGET", defaults.sui_gas_budget),
            sui_lock_gas_budget: parsed("SUI_LOCK_GAS_BUDGET", defaults.sui_lock_gas_budget),
            evm_scale: Scale::new(parsed("EVM_TOKEN_DECIMALS", EVM_TOKEN_DECIMALS)),
            sui_scale: Scale::new(parsed("SUI_TOKEN_DECIMALS", SUI_TOKEN_DECIMALS)),
            display_precision: parsed("DISPLAY_PRECISION", defaults.display_precision),
            command_timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn eth_rpc(&self) -> Result<&str, BridgeError> {
        require(&self.eth_rpc, "ETH_RPC")
    }

    pub fn eth_token_address(&self) -> Result<&str, BridgeError> {
        require(&self.eth_token_address, "ETH_IBT_ADDRESS")
    }

    pub fn eth_bridge_address(&self) -> Result<&str, BridgeError> {
        require(&self.eth_bridge_address, "ETH_BRIDGE_ADDRESS")
    }

    pub fn eth_user_pk(&self) -> Result<&str, BridgeError> {
        require(&self.eth_user_pk, "ETH_USER_PK")
    }

    pub fn eth_owner_pk(&self) -> Result<&str, BridgeError> {
        require(&self.eth_owner_pk, "ETH_OWNER_PK")
    }

    pub fn sui_package_id(&self) -> Result<&str, BridgeError> {
        require(&self.sui_package_id, "SUI_PACKAGE_ID")
    }

    /// Fully qualified type of the bridged coin objects on Sui.
    pub fn ibt_coin_type(&self) -> Result<String, BridgeError> {
        Ok(format!(
            "0x2::coin::Coin<{}::{}::{}>",
            self.sui_package_id()?,
            self.sui_module,
            crate::constants::IBT_COIN_STRUCT
        ))
    }
}

/// Borrows a configured value or reports which one is missing.
pub fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str, BridgeError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BridgeError::missing(name))
}

fn redact(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "<redacted>"
    } else {
        "<unset>"
    }
}

/// Signing keys are never printed.
impl fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("repo_root", &self.repo_root)
            .field("eth_workdir", &self.eth_workdir)
            .field("cast_bin", &self.cast_bin)
            .field("sui_bin", &self.sui_bin)
            .field("eth_rpc", &self.eth_rpc)
            .field("eth_token_address", &self.eth_token_address)
            .field("eth_bridge_address", &self.eth_bridge_address)
            .field("eth_user_pk", &redact(&self.eth_user_pk))
            .field("eth_owner_pk", &redact(&self.eth_owner_pk))
            .field("sui_package_id", &self.sui_package_id)
            .field("sui_env", &self.sui_env)
            .field("sui_module", &self.sui_module)
            .field("sui_gas_budget", &self.sui_gas_budget)
            .field("sui_lock_gas_budget", &self.sui_lock_gas_budget)
            .field("evm_scale", &self.evm_scale)
            .field("sui_scale", &self.sui_scale)
            .field("display_precision", &self.display_precision)
            .field("command_timeout", &self.command_timeout)
            .finish()
    }
}
