//! `sui client` wrapper for the object-based chain.
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::BridgeConfig,
    models::{
        AmountValue, BridgeError, ChainObjectRef, CommandError, CommandSpec, ParseError,
        TransactionReceipt,
    },
    services::{BalanceLookup, CommandExecutorTrait, ReceiptExtractor, SuiReceiptExtractor},
    utils::{deserialize_optional_amount_text, deserialize_u64, parse_amount},
};

/// Runs `sui client` from the repository root with whatever identity and
/// environment the CLI is currently configured for.
#[derive(Clone)]
pub struct SuiClient {
    executor: Arc<dyn CommandExecutorTrait>,
    config: Arc<BridgeConfig>,
    extractor: SuiReceiptExtractor,
}

impl SuiClient {
    pub fn new(executor: Arc<dyn CommandExecutorTrait>, config: Arc<BridgeConfig>) -> Self {
        Self {
            executor,
            config,
            extractor: SuiReceiptExtractor,
        }
    }

    fn command(&self) -> CommandSpec {
        CommandSpec::new(self.config.sui_bin.clone(), self.config.repo_root.clone()).arg("client")
    }

    /// Address of the identity the CLI signs with.
    pub async fn active_address(&self) -> Result<String, BridgeError> {
        let result = self
            .executor
            .execute(self.command().arg("active-address"))
            .await?;
        let address = result.stdout_trimmed();
        if address.is_empty() {
            return Err(BridgeError::Internal(
                "sui client active-address printed nothing".to_string(),
            ));
        }
        Ok(address.to_string())
    }

    /// `sui client call` against a function of the configured module.
    pub async fn call_move(
        &self,
        package_id: &str,
        function: &str,
        args: &[String],
        gas_budget: u64,
    ) -> Result<TransactionReceipt, CommandError> {
        let spec = self
            .command()
            .args(["call", "--package", package_id, "--module"])
            .arg(self.config.sui_module.clone())
            .args(["--function", function, "--args"])
            .args(args.iter().cloned())
            .arg("--gas-budget")
            .arg(gas_budget.to_string());
        let result = self.executor.execute(spec).await?;
        Ok(self.extractor.extract(&result.stdout))
    }

    /// Objects owned by `owner`, or by the active identity when `None`.
    pub async fn list_objects(
        &self,
        owner: Option<&str>,
    ) -> Result<Vec<ChainObjectRef>, BridgeError> {
        let mut spec = self.command().arg("objects");
        if let Some(owner) = owner {
            spec = spec.arg(owner);
        }
        let result = self.executor.execute(spec.arg("--json")).await?;
        Ok(parse_object_listing(&result.stdout)?)
    }

    /// Balance field of a single coin object.
    pub async fn object_balance(&self, object_id: &str) -> Result<AmountValue, BridgeError> {
        let spec = self.command().args(["object", object_id, "--json"]);
        let result = self.executor.execute(spec).await?;
        Ok(parse_object_balance(&result.stdout)?)
    }
}

#[async_trait]
impl BalanceLookup for SuiClient {
    async fn balance_of(&self, object: &ChainObjectRef) -> Result<AmountValue, BridgeError> {
        match object.balance {
            Some(balance) => Ok(balance),
            None => self.object_balance(&object.object_id).await,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawObject {
    #[serde(default)]
    object_id: Option<String>,
    #[serde(default, rename = "type")]
    type_tag: Option<String>,
    #[serde(default, deserialize_with = "deserialize_u64")]
    version: u64,
    #[serde(default)]
    content: Option<RawContent>,
}

#[derive(Debug, Default, Deserialize)]
struct RawContent {
    #[serde(default)]
    fields: Option<RawFields>,
}

#[derive(Debug, Default, Deserialize)]
struct RawFields {
    #[serde(default, deserialize_with = "deserialize_optional_amount_text")]
    balance: Option<String>,
}

/// Listing entries come either wrapped as `{"data": {...}}` or flat,
/// depending on the CLI version.
#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    data: Option<RawObject>,
    #[serde(flatten)]
    inline: RawObject,
}

impl RawObject {
    fn balance(&self) -> Result<Option<AmountValue>, ParseError> {
        self.content
            .as_ref()
            .and_then(|c| c.fields.as_ref())
            .and_then(|f| f.balance.as_deref())
            .map(parse_amount)
            .transpose()
    }
}

/// Parses `sui client objects --json`. Entries without an id or a type
/// (deleted or wrapped objects) are skipped.
pub fn parse_object_listing(json: &str) -> Result<Vec<ChainObjectRef>, ParseError> {
    let entries: Vec<RawEntry> = serde_json::from_str(json.trim())
        .map_err(|e| ParseError::InvalidObjectData(e.to_string()))?;

    let mut objects = Vec::with_capacity(entries.len());
    for entry in entries {
        let raw = entry.data.unwrap_or(entry.inline);
        let balance = raw.balance()?;
        let (Some(object_id), Some(type_tag)) = (raw.object_id, raw.type_tag) else {
            continue;
        };
        let mut object = ChainObjectRef::new(object_id, type_tag, raw.version);
        if let Some(balance) = balance {
            object = object.with_balance(balance);
        }
        objects.push(object);
    }
    Ok(objects)
}

/// Reads `content.fields.balance` from `sui client object <id> --json`.
pub fn parse_object_balance(json: &str) -> Result<AmountValue, ParseError> {
    let value: Value = serde_json::from_str(json.trim())
        .map_err(|e| ParseError::InvalidObjectData(e.to_string()))?;
    let object = value.get("data").unwrap_or(&value);
    let balance = object
        .pointer("/content/fields/balance")
        .ok_or_else(|| ParseError::InvalidObjectData("object has no balance field".to_string()))?;
    match balance {
        Value::String(text) => parse_amount(text),
        Value::Number(number) => parse_amount(&number.to_string()),
        other => Err(ParseError::InvalidObjectData(format!(
            "unexpected balance value {other}"
        ))),
    }
}
