//! The bridge's primitive operations.
//!
//! Each operation checks every identifier and credential it needs before the
//! first external call, then runs a fixed sequence of CLI invocations. Calls
//! inside one operation are strictly sequential. Operations that sign with
//! the same key are serialized through the [`SubmissionQueue`].
//!
//! Nothing here is idempotent: calling an operation twice submits twice.
use std::{future::Future, sync::Arc};

use log::{debug, info, warn};
use uuid::Uuid;

mod saga;
pub use saga::*;

mod submission_queue;
pub use submission_queue::*;

use crate::{
    config::{require, BridgeConfig},
    constants::{
        SIG_APPROVE, SIG_BRIDGE_TO_SUI, SIG_MINT_FROM_SUI, STEP_ETH_TO_SUI_SENT,
        STEP_MINTED_ON_ETH, STEP_SUI_BRIDGE_INIT, STEP_SUI_LOCK_SENT, STEP_SUI_MINT_SENT,
        STEP_SUI_RELEASE_SENT, SUI_FN_INIT_BRIDGE, SUI_FN_LOCK, SUI_FN_MINT, SUI_FN_RELEASE,
    },
    metrics::record_operation,
    models::{
        BridgeError, BridgeToSuiRequest, BridgeToSuiResponse, ChainKind, CoinBalanceResponse,
        EthBalanceRequest, EthBalanceResponse, HealthResponse, InitBridgeRequest,
        InitBridgeResponse, LatestObjectResponse, MintFromSuiRequest, MintFromSuiResponse,
        ParseError, StepRecord, SuiLockRequest, SuiMintRequest, SuiReleaseRequest, SuiTxResponse,
        TransactionReceipt, TransferIntent,
    },
    services::{
        aggregate_balances, matching, select_latest, CastClient, CommandExecutorTrait, SuiClient,
    },
    utils::{
        convert_scale, eth_address_to_bytes20, parse_amount, sui_address_to_bytes32,
        to_display_string, to_integer_string, to_u64_amount,
    },
};

/// Logs start and outcome of an operation under a fresh correlation id and
/// counts it in the operation metrics.
async fn observe<T, F>(operation: &'static str, work: F) -> Result<T, BridgeError>
where
    F: Future<Output = Result<T, BridgeError>>,
{
    let op_id = Uuid::new_v4();
    info!("[{op_id}] {operation} started");
    let result = work.await;
    match &result {
        Ok(_) => info!("[{op_id}] {operation} completed"),
        Err(e) => warn!("[{op_id}] {operation} failed: {e}"),
    }
    record_operation(operation, &result);
    result
}

fn sui_tx(step: &str, receipt: TransactionReceipt) -> SuiTxResponse {
    if receipt.digest.is_none() {
        warn!("{step}: sui client succeeded but printed no transaction digest");
    }
    SuiTxResponse {
        step: step.to_string(),
        digest: receipt.digest,
        raw: receipt.raw,
    }
}

/// Parses a request amount destined for a Sui `u64` argument.
fn parse_sui_amount(raw: &Option<String>, name: &str) -> Result<u64, BridgeError> {
    let amount = parse_amount(require(raw, name)?)?;
    Ok(to_u64_amount(amount)?)
}

fn optional_owner(owner: Option<String>) -> Result<Option<String>, BridgeError> {
    match owner.as_deref().map(str::trim).filter(|o| !o.is_empty()) {
        Some(owner) => Ok(Some(sui_address_to_bytes32(owner)?)),
        None => Ok(None),
    }
}

pub struct BridgeOrchestrator {
    config: Arc<BridgeConfig>,
    cast: CastClient,
    sui: SuiClient,
    queue: SubmissionQueue,
}

impl BridgeOrchestrator {
    pub fn new(config: Arc<BridgeConfig>, executor: Arc<dyn CommandExecutorTrait>) -> Self {
        Self {
            cast: CastClient::new(executor.clone(), config.clone()),
            sui: SuiClient::new(executor, config.clone()),
            queue: SubmissionQueue::new(),
            config,
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            repo: self.config.repo_root.display().to_string(),
            eth_rpc: self.config.eth_rpc.clone(),
            eth_ibt: self.config.eth_token_address.clone(),
            eth_bridge: self.config.eth_bridge_address.clone(),
            sui_env: self.config.sui_env.clone(),
            sui_package_id: self.config.sui_package_id.clone(),
        }
    }

    /// Token balance of an EVM address, raw and in whole tokens.
    pub async fn eth_balance(
        &self,
        request: EthBalanceRequest,
    ) -> Result<EthBalanceResponse, BridgeError> {
        observe("ethBalance", async move {
            let rpc = self.config.eth_rpc()?;
            let token = self.config.eth_token_address()?;
            let address = eth_address_to_bytes20(require(&request.address, "address")?)?;

            let balance = self.cast.balance_of(rpc, token, &address).await?;
            Ok(EthBalanceResponse {
                address,
                balance: to_integer_string(balance),
                balance_eth: to_display_string(
                    balance,
                    self.config.evm_scale,
                    self.config.display_precision,
                ),
                token: token.to_string(),
            })
        })
        .await
    }

    /// Approves the bridge contract, then calls `bridgeToSui`. The approval
    /// stays in place if the second call fails.
    pub async fn burn_and_notify(
        &self,
        request: BridgeToSuiRequest,
    ) -> Result<BridgeToSuiResponse, BridgeError> {
        observe("burnAndNotify", async move {
            let rpc = self.config.eth_rpc()?;
            let token = self.config.eth_token_address()?;
            let bridge = self.config.eth_bridge_address()?;
            let user_pk = self.config.eth_user_pk()?;
            let amount_text = require(&request.amount_wei, "amountWei")?;
            let amount = parse_amount(amount_text)?;
            let recipient =
                sui_address_to_bytes32(require(&request.sui_recipient_bytes, "suiRecipientBytes")?)?;

            let intent = TransferIntent::new(ChainKind::Evm, ChainKind::Sui, amount, &recipient);
            let (evm, sui) = (self.config.evm_scale, self.config.sui_scale);
            let sui_amount = to_u64_amount(intent.destination_amount(evm, sui)?)?;
            if sui_amount == 0 {
                return Err(ParseError::BelowMinimum {
                    value: amount_text.to_string(),
                    unit: "Sui base unit",
                }
                .into());
            }
            let dust = intent.dust(evm, sui)?;
            if !dust.is_zero() {
                warn!("burnAndNotify: {dust} wei cannot be represented on Sui and will not be minted there");
            }
            debug!("burnAndNotify intent: {intent:?}");

            let amount_wei = to_integer_string(amount);
            let _lane = self.queue.acquire(user_pk).await;
            let mut saga = SagaLog::new("burnAndNotify");

            let approve = match self
                .cast
                .send(
                    rpc,
                    user_pk,
                    token,
                    SIG_APPROVE,
                    &[bridge.to_string(), amount_wei.clone()],
                )
                .await
            {
                Ok(receipt) => receipt,
                Err(e) => return Err(saga.fail("approve", e)),
            };
            saga.record(StepRecord::new("approve").with_tx_hash(approve.tx_hash.clone()));

            let sent = match self
                .cast
                .send(
                    rpc,
                    user_pk,
                    bridge,
                    SIG_BRIDGE_TO_SUI,
                    &[amount_wei.clone(), recipient.clone()],
                )
                .await
            {
                Ok(receipt) => receipt,
                Err(e) => return Err(saga.fail("bridgeToSui", e)),
            };
            saga.record(StepRecord::new("bridgeToSui").with_tx_hash(sent.tx_hash.clone()));

            Ok(BridgeToSuiResponse {
                step: STEP_ETH_TO_SUI_SENT.to_string(),
                tx_hash: sent.tx_hash,
                approve_tx_hash: approve.tx_hash,
                amount_wei,
                sui_recipient_bytes: recipient,
                sui_amount_u64: sui_amount.to_string(),
                cast_output: sent.raw,
                steps: saga.into_steps(),
            })
        })
        .await
    }

    /// Mints on the EVM side for a Sui lock. The digest is hashed with
    /// `cast keccak` and passed to `mintFromSui` as the replay key. Whether
    /// the lock really happened is not verified.
    pub async fn mint_from_proof(
        &self,
        request: MintFromSuiRequest,
    ) -> Result<MintFromSuiResponse, BridgeError> {
        observe("mintFromProof", async move {
            let rpc = self.config.eth_rpc()?;
            let bridge = self.config.eth_bridge_address()?;
            let owner_pk = self.config.eth_owner_pk()?;
            let to = eth_address_to_bytes20(require(&request.to, "to")?)?;
            let amount = parse_amount(require(&request.amount_wei, "amountWei")?)?;
            let digest = require(&request.sui_digest, "suiDigest")?.to_string();

            let (evm, sui) = (self.config.evm_scale, self.config.sui_scale);
            let locked = convert_scale(amount, evm, sui)?;
            let intent = TransferIntent::new(ChainKind::Sui, ChainKind::Evm, locked, &to)
                .with_source_digest(&digest);
            let expected = intent.destination_amount(sui, evm)?;
            if expected != amount {
                warn!(
                    "mintFromProof: {amount} wei is not a whole number of Sui units, a lock of {locked} maps to {expected} wei"
                );
            }
            debug!("mintFromProof intent: {intent:?}");

            let amount_wei = to_integer_string(amount);
            let _lane = self.queue.acquire(owner_pk).await;
            let mut saga = SagaLog::new("mintFromProof");

            let digest_keccak = match self.cast.keccak(&digest).await {
                Ok(hash) => hash,
                Err(e) => return Err(saga.fail("keccak", e)),
            };
            saga.record(StepRecord::new("keccak").with_output(digest_keccak.clone()));

            let minted = match self
                .cast
                .send(
                    rpc,
                    owner_pk,
                    bridge,
                    SIG_MINT_FROM_SUI,
                    &[to, amount_wei, digest_keccak.clone()],
                )
                .await
            {
                Ok(receipt) => receipt,
                Err(e) => return Err(saga.fail("mintFromSui", e)),
            };
            saga.record(StepRecord::new("mintFromSui").with_tx_hash(minted.tx_hash.clone()));

            Ok(MintFromSuiResponse {
                step: STEP_MINTED_ON_ETH.to_string(),
                digest,
                digest_keccak,
                tx_hash: minted.tx_hash,
                cast_output: minted.raw,
                steps: saga.into_steps(),
            })
        })
        .await
    }

    /// Creates the shared bridge object with `relayer` as the authorized
    /// relayer, defaulting to the active CLI identity.
    pub async fn init_bridge(
        &self,
        request: InitBridgeRequest,
    ) -> Result<InitBridgeResponse, BridgeError> {
        observe("initBridge", async move {
            let package = self.config.sui_package_id()?;
            let requested = optional_owner(request.relayer)?;

            let _lane = self.queue.acquire(SUI_ACTIVE_IDENTITY_LANE).await;
            let relayer = match requested {
                Some(relayer) => relayer,
                None => self.sui.active_address().await?,
            };
            let receipt = self
                .sui
                .call_move(
                    package,
                    SUI_FN_INIT_BRIDGE,
                    &[relayer.clone()],
                    self.config.sui_gas_budget,
                )
                .await?;
            let tx = sui_tx(STEP_SUI_BRIDGE_INIT, receipt);

            Ok(InitBridgeResponse {
                step: tx.step,
                relayer,
                digest: tx.digest,
                raw: tx.raw,
            })
        })
        .await
    }

    pub async fn mint(&self, request: SuiMintRequest) -> Result<SuiTxResponse, BridgeError> {
        observe("mint", async move {
            let package = self.config.sui_package_id()?;
            let cap_id = require(&request.cap_id, "capId")?;
            let amount = parse_sui_amount(&request.amount_u64, "amountU64")?;
            let recipient = sui_address_to_bytes32(require(&request.recipient, "recipient")?)?;

            let _lane = self.queue.acquire(SUI_ACTIVE_IDENTITY_LANE).await;
            let receipt = self
                .sui
                .call_move(
                    package,
                    SUI_FN_MINT,
                    &[cap_id.to_string(), amount.to_string(), recipient],
                    self.config.sui_gas_budget,
                )
                .await?;
            Ok(sui_tx(STEP_SUI_MINT_SENT, receipt))
        })
        .await
    }

    /// Locks a whole IBT coin object. The returned digest is what a caller
    /// later passes to [`BridgeOrchestrator::mint_from_proof`].
    pub async fn lock(&self, request: SuiLockRequest) -> Result<SuiTxResponse, BridgeError> {
        observe("lock", async move {
            let package = self.config.sui_package_id()?;
            let bridge_object = require(&request.bridge_object_id, "bridgeObjectId")?;
            let coin_object = require(&request.coin_object_id, "coinObjectId")?;
            let recipient =
                eth_address_to_bytes20(require(&request.eth_recipient_bytes, "ethRecipientBytes")?)?;

            let _lane = self.queue.acquire(SUI_ACTIVE_IDENTITY_LANE).await;
            let receipt = self
                .sui
                .call_move(
                    package,
                    SUI_FN_LOCK,
                    &[bridge_object.to_string(), coin_object.to_string(), recipient],
                    self.config.sui_lock_gas_budget,
                )
                .await?;
            Ok(sui_tx(STEP_SUI_LOCK_SENT, receipt))
        })
        .await
    }

    pub async fn release(&self, request: SuiReleaseRequest) -> Result<SuiTxResponse, BridgeError> {
        observe("release", async move {
            let package = self.config.sui_package_id()?;
            let bridge_object = require(&request.bridge_object_id, "bridgeObjectId")?;
            let amount = parse_sui_amount(&request.amount_u64, "amountU64")?;
            let recipient = sui_address_to_bytes32(require(&request.recipient, "recipient")?)?;

            let _lane = self.queue.acquire(SUI_ACTIVE_IDENTITY_LANE).await;
            let receipt = self
                .sui
                .call_move(
                    package,
                    SUI_FN_RELEASE,
                    &[bridge_object.to_string(), amount.to_string(), recipient],
                    self.config.sui_gas_budget,
                )
                .await?;
            Ok(sui_tx(STEP_SUI_RELEASE_SENT, receipt))
        })
        .await
    }

    /// Highest-version IBT coin owned by `owner`. No coin is a normal
    /// `found: false` answer.
    pub async fn latest_coin(
        &self,
        owner: Option<String>,
    ) -> Result<LatestObjectResponse, BridgeError> {
        observe("latestCoin", async move {
            let coin_type = self.config.ibt_coin_type()?;
            let owner = optional_owner(owner)?;

            let objects = self.sui.list_objects(owner.as_deref()).await?;
            Ok(match select_latest(&objects, &coin_type) {
                Some(coin) => LatestObjectResponse {
                    found: true,
                    object_id: Some(coin.object_id.clone()),
                    type_tag: Some(coin.type_tag.clone()),
                    version: Some(coin.version),
                },
                None => LatestObjectResponse::not_found(),
            })
        })
        .await
    }

    /// Total IBT held by `owner` across all coin objects.
    pub async fn coin_balance(
        &self,
        owner: Option<String>,
    ) -> Result<CoinBalanceResponse, BridgeError> {
        observe("coinBalance", async move {
            let coin_type = self.config.ibt_coin_type()?;
            let owner = optional_owner(owner)?;

            let objects = self.sui.list_objects(owner.as_deref()).await?;
            let total = aggregate_balances(&objects, &coin_type, &self.sui).await?;
            Ok(CoinBalanceResponse {
                owner,
                object_count: matching(&objects, &coin_type).count(),
                coin_type,
                balance: to_integer_string(total),
                balance_display: to_display_string(
                    total,
                    self.config.sui_scale,
                    self.config.display_precision,
                ),
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{CommandError, CommandResult, CommandSpec},
        services::MockCommandExecutorTrait,
    };
    use mockall::Sequence;

    const TOKEN: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
    const BRIDGE: &str = "0xe7f1725e7734ce288f8367e1bb143e90bb3f0512";
    const USER_PK: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
    const OWNER_PK: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const PKG: &str = "0xabc";
    const COIN_TYPE: &str = "0x2::coin::Coin<0xabc::ibt::IBT>";

    fn config() -> BridgeConfig {
        BridgeConfig {
            eth_rpc: Some("http://127.0.0.1:8545".to_string()),
            eth_token_address: Some(TOKEN.to_string()),
            eth_bridge_address: Some(BRIDGE.to_string()),
            eth_user_pk: Some(USER_PK.to_string()),
            eth_owner_pk: Some(OWNER_PK.to_string()),
            sui_package_id: Some(PKG.to_string()),
            sui_env: Some("localnet".to_string()),
            ..BridgeConfig::default()
        }
    }

    fn orchestrator(config: BridgeConfig, executor: MockCommandExecutorTrait) -> BridgeOrchestrator {
        BridgeOrchestrator::new(Arc::new(config), Arc::new(executor))
    }

    fn cast_sent(byte: &str) -> CommandResult {
        CommandResult::ok(format!(
            "blockNumber          12\nstatus               1 (success)\ntransactionHash      0x{}\n",
            byte.repeat(32)
        ))
    }

    fn sui_sent(digest: &str) -> CommandResult {
        CommandResult::ok(format!(
            "Transaction Digest: {digest}\n╭──────────────────╮\n│ Transaction Data │\n"
        ))
    }

    fn is_send(spec: &CommandSpec, to: &str, signature: &str) -> bool {
        spec.args.first().map(String::as_str) == Some("send")
            && spec.args.get(5).map(String::as_str) == Some(to)
            && spec.args.get(6).map(String::as_str) == Some(signature)
    }

    fn is_sui_call(spec: &CommandSpec, function: &str) -> bool {
        spec.args.get(1).map(String::as_str) == Some("call")
            && spec.args.iter().any(|a| a == function)
    }

    #[tokio::test]
    async fn test_burn_and_notify_requires_user_key_before_any_call() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();
        let bridge = orchestrator(
            BridgeConfig {
                eth_user_pk: None,
                ..config()
            },
            executor,
        );

        let err = bridge
            .burn_and_notify(BridgeToSuiRequest {
                amount_wei: Some("1000000000000000000".to_string()),
                sui_recipient_bytes: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required value: ETH_USER_PK"
        );
    }

    #[tokio::test]
    async fn test_burn_and_notify_approves_then_bridges() {
        let mut executor = MockCommandExecutorTrait::new();
        let mut seq = Sequence::new();
        executor
            .expect_execute()
            .withf(|spec| {
                is_send(spec, TOKEN, SIG_APPROVE)
                    && spec.args[7] == BRIDGE
                    && spec.args[8] == "1000000000000000000"
                    && spec.args[4] == USER_PK
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(cast_sent("11")));
        executor
            .expect_execute()
            .withf(|spec| {
                is_send(spec, BRIDGE, SIG_BRIDGE_TO_SUI)
                    && spec.args[7] == "1000000000000000000"
                    && spec.args[8] == format!("0x{}2", "0".repeat(63))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(cast_sent("22")));

        let response = orchestrator(config(), executor)
            .burn_and_notify(BridgeToSuiRequest {
                amount_wei: Some("1e18".to_string()),
                sui_recipient_bytes: Some("0x2".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.step, "ETH_TO_SUI_SENT");
        assert_eq!(response.amount_wei, "1000000000000000000");
        assert_eq!(response.sui_amount_u64, "1000000000");
        assert_eq!(response.approve_tx_hash, Some(format!("0x{}", "11".repeat(32))));
        assert_eq!(response.tx_hash, Some(format!("0x{}", "22".repeat(32))));
        assert_eq!(response.steps.len(), 2);
        assert_eq!(response.steps[0].name, "approve");
        assert_eq!(response.steps[1].name, "bridgeToSui");
    }

    #[tokio::test]
    async fn test_burn_and_notify_second_step_failure_is_partial() {
        let mut executor = MockCommandExecutorTrait::new();
        let mut seq = Sequence::new();
        executor
            .expect_execute()
            .withf(|spec| is_send(spec, TOKEN, SIG_APPROVE))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(cast_sent("11")));
        executor
            .expect_execute()
            .withf(|spec| is_send(spec, BRIDGE, SIG_BRIDGE_TO_SUI))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Err(CommandError::Failed {
                    program: "cast".to_string(),
                    code: Some(1),
                    diagnostic: "execution reverted: insufficient allowance".to_string(),
                })
            });

        let err = orchestrator(config(), executor)
            .burn_and_notify(BridgeToSuiRequest {
                amount_wei: Some("5000000000".to_string()),
                sui_recipient_bytes: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();

        match err {
            BridgeError::PartialFailure {
                step,
                completed,
                source,
            } => {
                assert_eq!(step, "bridgeToSui");
                assert_eq!(completed.len(), 1);
                assert_eq!(completed[0].tx_hash, Some(format!("0x{}", "11".repeat(32))));
                assert!(source.to_string().contains("insufficient allowance"));
            }
            other => panic!("expected partial failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_burn_and_notify_rejects_amount_below_one_sui_unit() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(config(), executor)
            .burn_and_notify(BridgeToSuiRequest {
                amount_wei: Some("999999999".to_string()),
                sui_recipient_bytes: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Parse(ParseError::BelowMinimum { .. })
        ));
    }

    #[tokio::test]
    async fn test_burn_and_notify_rejects_bad_amount() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(config(), executor)
            .burn_and_notify(BridgeToSuiRequest {
                amount_wei: Some("1.5 tokens".to_string()),
                sui_recipient_bytes: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Parse(ParseError::InvalidAmount(_))));
    }

    #[tokio::test]
    async fn test_mint_from_proof_hashes_digest_then_mints() {
        let keccak = format!("0x{}", "cd".repeat(32));
        let expected_keccak = keccak.clone();
        let mut executor = MockCommandExecutorTrait::new();
        let mut seq = Sequence::new();
        executor
            .expect_execute()
            .withf(|spec| spec.args == vec!["keccak", "7Hq3XbLockDigest"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(CommandResult::ok(format!("{keccak}\n"))));
        executor
            .expect_execute()
            .withf(move |spec| {
                is_send(spec, BRIDGE, SIG_MINT_FROM_SUI)
                    && spec.args[4] == OWNER_PK
                    && spec.args[7] == "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"
                    && spec.args[8] == "1000000000000000000"
                    && spec.args[9] == expected_keccak
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(cast_sent("33")));

        let response = orchestrator(config(), executor)
            .mint_from_proof(MintFromSuiRequest {
                to: Some("0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string()),
                amount_wei: Some("1000000000000000000".to_string()),
                sui_digest: Some("7Hq3XbLockDigest".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(response.step, "MINTED_ON_ETH");
        assert_eq!(response.digest, "7Hq3XbLockDigest");
        assert_eq!(response.digest_keccak, format!("0x{}", "cd".repeat(32)));
        assert_eq!(response.steps.len(), 2);
    }

    #[tokio::test]
    async fn test_mint_from_proof_requires_digest() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(config(), executor)
            .mint_from_proof(MintFromSuiRequest {
                to: Some("0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string()),
                amount_wei: Some("1".to_string()),
                sui_digest: Some("   ".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required value: suiDigest");
    }

    #[tokio::test]
    async fn test_init_bridge_defaults_to_active_address() {
        let mut executor = MockCommandExecutorTrait::new();
        let mut seq = Sequence::new();
        executor
            .expect_execute()
            .withf(|spec| spec.args == vec!["client", "active-address"])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CommandResult::ok("0xrelayer\n")));
        executor
            .expect_execute()
            .withf(|spec| {
                is_sui_call(spec, SUI_FN_INIT_BRIDGE)
                    && spec.args.contains(&"0xrelayer".to_string())
                    && spec.args.last().map(String::as_str) == Some("20000000")
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(sui_sent("InitDigest1")));

        let response = orchestrator(config(), executor)
            .init_bridge(InitBridgeRequest::default())
            .await
            .unwrap();
        assert_eq!(response.step, "SUI_BRIDGE_INIT");
        assert_eq!(response.relayer, "0xrelayer");
        assert_eq!(response.digest.as_deref(), Some("InitDigest1"));
    }

    #[tokio::test]
    async fn test_init_bridge_requires_package_id() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(
            BridgeConfig {
                sui_package_id: None,
                ..config()
            },
            executor,
        )
        .init_bridge(InitBridgeRequest::default())
        .await
        .unwrap_err();
        assert!(matches!(err, BridgeError::Config(_)));
    }

    #[tokio::test]
    async fn test_mint_requires_cap_id_before_any_call() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(config(), executor)
            .mint(SuiMintRequest {
                cap_id: None,
                amount_u64: Some("1000000000".to_string()),
                recipient: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required value: capId");
    }

    #[tokio::test]
    async fn test_mint_uses_sui_scale_amount() {
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| {
                is_sui_call(spec, SUI_FN_MINT)
                    && spec.args.contains(&"0xcap".to_string())
                    && spec.args.contains(&"1000000000".to_string())
                    && spec.args.contains(&format!("0x{}2", "0".repeat(63)))
            })
            .times(1)
            .returning(|_| Ok(sui_sent("MintDigest")));

        let response = orchestrator(config(), executor)
            .mint(SuiMintRequest {
                cap_id: Some("0xcap".to_string()),
                amount_u64: Some("1e9".to_string()),
                recipient: Some("0x2".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.step, "SUI_MINT_SENT");
        assert_eq!(response.digest.as_deref(), Some("MintDigest"));
    }

    #[tokio::test]
    async fn test_lock_uses_lock_budget_and_normalized_recipient() {
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| {
                is_sui_call(spec, SUI_FN_LOCK)
                    && spec.args.contains(&"0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string())
                    && spec.args.last().map(String::as_str) == Some("40000000")
            })
            .times(1)
            .returning(|_| Ok(sui_sent("LockDigest")));

        let response = orchestrator(config(), executor)
            .lock(SuiLockRequest {
                bridge_object_id: Some("0xbridge".to_string()),
                coin_object_id: Some("0xcoin".to_string()),
                eth_recipient_bytes: Some("0x70997970C51812dc3A010C7d01b50e0d17dc79C8".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.digest.as_deref(), Some("LockDigest"));
    }

    #[tokio::test]
    async fn test_release_rejects_amount_beyond_u64() {
        let mut executor = MockCommandExecutorTrait::new();
        executor.expect_execute().never();

        let err = orchestrator(config(), executor)
            .release(SuiReleaseRequest {
                bridge_object_id: Some("0xbridge".to_string()),
                amount_u64: Some("18446744073709551616".to_string()),
                recipient: Some("0x2".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BridgeError::Parse(ParseError::Overflow { .. })));
    }

    #[tokio::test]
    async fn test_release_missing_digest_is_still_success() {
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| is_sui_call(spec, SUI_FN_RELEASE))
            .returning(|_| Ok(CommandResult::ok("unexpected output format")));

        let response = orchestrator(config(), executor)
            .release(SuiReleaseRequest {
                bridge_object_id: Some("0xbridge".to_string()),
                amount_u64: Some("5".to_string()),
                recipient: Some("0x2".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.step, "SUI_RELEASE_SENT");
        assert!(response.digest.is_none());
    }

    #[tokio::test]
    async fn test_latest_coin_selects_highest_version() {
        let listing = format!(
            r#"[
              {{"data": {{"objectId": "0xold", "version": "3", "type": "{COIN_TYPE}"}}}},
              {{"data": {{"objectId": "0xnew", "version": "7", "type": "{COIN_TYPE}"}}}},
              {{"data": {{"objectId": "0xgas", "version": "9", "type": "0x2::coin::Coin<0x2::sui::SUI>"}}}}
            ]"#
        );
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| spec.args == vec!["client", "objects", "--json"])
            .times(1)
            .returning(move |_| Ok(CommandResult::ok(listing.clone())));

        let response = orchestrator(config(), executor)
            .latest_coin(None)
            .await
            .unwrap();
        assert!(response.found);
        assert_eq!(response.object_id.as_deref(), Some("0xnew"));
        assert_eq!(response.version, Some(7));
    }

    #[tokio::test]
    async fn test_latest_coin_not_found_is_not_an_error() {
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .returning(|_| Ok(CommandResult::ok("[]")));

        let response = orchestrator(config(), executor)
            .latest_coin(Some("0x2".to_string()))
            .await
            .unwrap();
        assert_eq!(response, LatestObjectResponse::not_found());
    }

    #[tokio::test]
    async fn test_coin_balance_sums_objects() {
        let listing = format!(
            r#"[
              {{"data": {{"objectId": "0xa", "version": "1", "type": "{COIN_TYPE}"}}}},
              {{"data": {{"objectId": "0xb", "version": "2", "type": "{COIN_TYPE}"}}}}
            ]"#
        );
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| spec.args.get(1).map(String::as_str) == Some("objects"))
            .times(1)
            .returning(move |_| Ok(CommandResult::ok(listing.clone())));
        executor
            .expect_execute()
            .withf(|spec| spec.args.get(1).map(String::as_str) == Some("object"))
            .times(2)
            .returning(|_| {
                Ok(CommandResult::ok(
                    r#"{"content": {"fields": {"balance": "500000000"}}}"#,
                ))
            });

        let response = orchestrator(config(), executor)
            .coin_balance(None)
            .await
            .unwrap();
        assert_eq!(response.object_count, 2);
        assert_eq!(response.balance, "1000000000");
        assert_eq!(response.balance_display, "1");
        assert_eq!(response.coin_type, COIN_TYPE);
    }

    #[tokio::test]
    async fn test_eth_balance_formats_whole_tokens() {
        let mut executor = MockCommandExecutorTrait::new();
        executor
            .expect_execute()
            .withf(|spec| spec.args.first().map(String::as_str) == Some("call"))
            .returning(|_| Ok(CommandResult::ok("1500000000000000000 [1.5e18]\n")));

        let response = orchestrator(config(), executor)
            .eth_balance(EthBalanceRequest {
                address: Some("0x70997970c51812dc3a010c7d01b50e0d17dc79c8".to_string()),
            })
            .await
            .unwrap();
        assert_eq!(response.balance, "1500000000000000000");
        assert_eq!(response.balance_eth, "1.5");
        assert_eq!(response.token, TOKEN);
    }

    #[test]
    fn test_health_reports_configuration() {
        let health = orchestrator(config(), MockCommandExecutorTrait::new()).health();
        assert_eq!(health.eth_bridge.as_deref(), Some(BRIDGE));
        assert_eq!(health.sui_env.as_deref(), Some("localnet"));
        assert_eq!(health.sui_package_id.as_deref(), Some(PKG));
    }
}
