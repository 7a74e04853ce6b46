//! `cast` (Foundry) client for the account-based chain.
use std::sync::Arc;

use log::debug;

use crate::{
    config::BridgeConfig,
    models::{AmountValue, BridgeError, CommandError, CommandSpec, TransactionReceipt},
    services::{CastReceiptExtractor, CommandExecutorTrait, ReceiptExtractor},
    utils::parse_amount,
};

/// Runs `cast` inside the EVM contracts project directory.
#[derive(Clone)]
pub struct CastClient {
    executor: Arc<dyn CommandExecutorTrait>,
    config: Arc<BridgeConfig>,
    extractor: CastReceiptExtractor,
}

impl CastClient {
    pub fn new(executor: Arc<dyn CommandExecutorTrait>, config: Arc<BridgeConfig>) -> Self {
        Self {
            executor,
            config,
            extractor: CastReceiptExtractor,
        }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(self.config.cast_bin.clone(), self.config.eth_workdir.clone())
    }

    /// Read-only contract call. Returns the trimmed decoded output.
    pub async fn call(
        &self,
        rpc: &str,
        to: &str,
        signature: &str,
        args: &[String],
    ) -> Result<String, CommandError> {
        let spec = self
            .command()
            .args(["call", to, signature])
            .args(args.iter().cloned())
            .args(["--rpc-url", rpc]);
        let result = self.executor.execute(spec).await?;
        Ok(result.stdout_trimmed().to_string())
    }

    /// Signed transaction. The private key never leaves the argument list
    /// and is masked in logs.
    pub async fn send(
        &self,
        rpc: &str,
        private_key: &str,
        to: &str,
        signature: &str,
        args: &[String],
    ) -> Result<TransactionReceipt, CommandError> {
        let spec = self
            .command()
            .args(["send", "--rpc-url", rpc, "--private-key"])
            .secret_arg(private_key)
            .args([to, signature])
            .args(args.iter().cloned());
        let result = self.executor.execute(spec).await?;
        let receipt = self.extractor.extract(result.stdout_trimmed());
        if receipt.tx_hash.is_none() {
            debug!("cast send to {to} succeeded but printed no transactionHash");
        }
        Ok(receipt)
    }

    /// Keccak-256 of `input`, as printed by `cast keccak`.
    pub async fn keccak(&self, input: &str) -> Result<String, CommandError> {
        let spec = self.command().args(["keccak", input]);
        let result = self.executor.execute(spec).await?;
        Ok(result.stdout_trimmed().to_string())
    }

    /// ERC-20 `balanceOf`, in wei. `cast` may append a scientific
    /// annotation such as `[1e18]`, which is ignored.
    pub async fn balance_of(
        &self,
        rpc: &str,
        token: &str,
        owner: &str,
    ) -> Result<AmountValue, BridgeError> {
        let output = self
            .call(
                rpc,
                token,
                crate::constants::SIG_BALANCE_OF,
                &[owner.to_string()],
            )
            .await?;
        Ok(parse_amount(&output)?)
    }
}
