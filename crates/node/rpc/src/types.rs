//! Request and reply bodies of the `Validator` service.

use alloy_primitives::{Address, B256, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Parameters of `Validator.GetMessageResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMessageResultArgs {
    /// The hash of the transaction that carried the message.
    pub tx_hash: B256,
}

/// Reply of `Validator.GetMessageResult`.
///
/// The proof fields are passed through as the validator formats them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMessageResultReply {
    /// Whether the validator has a result for the message.
    pub found: bool,
    /// The hex-encoded result value.
    pub raw_val: String,
    /// The log accumulator before the result.
    pub log_pre_hash: String,
    /// The log accumulator after the result.
    pub log_post_hash: String,
    /// The hashes of the logs in the same assertion. Older validators omit them.
    pub log_val_hashes: Option<Vec<String>>,
    /// The validator signatures over the assertion.
    pub validator_sigs: Vec<String>,
    /// The partial hash of the assertion.
    pub partial_hash: String,
    /// The hash of the transaction that confirmed the assertion on chain.
    pub on_chain_tx_hash: String,
}

/// Parameters of `Validator.SendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageArgs {
    /// The destination.
    pub to: Address,
    /// The sender's sequence number.
    pub sequence_num: U256,
    /// The value transferred.
    pub value: U256,
    /// The call data.
    pub data: Bytes,
    /// The sender's signature over the message.
    pub signature: Bytes,
    /// The sender's public key.
    pub pubkey: Bytes,
}

/// Reply of `Validator.SendMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageReply {
    /// The hash under which the message can be looked up.
    pub tx_hash: B256,
}

/// Parameters of `Validator.CallMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMessageArgs {
    /// The called contract.
    pub contract_address: Address,
    /// The call data.
    pub data: Bytes,
    /// The account the call is made from.
    pub sender: Address,
}

/// Reply of `Validator.CallMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallMessageReply {
    /// The hex-encoded result value.
    pub raw_val: String,
}

/// Parameters of `Validator.FindLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindLogsArgs {
    /// The emitting contract.
    pub address: Address,
    /// The first height searched.
    pub from_height: u64,
    /// The last height searched.
    pub to_height: u64,
    /// The topics to match, by position.
    pub topics: Vec<B256>,
}

/// A log returned by `Validator.FindLogs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogInfo {
    /// The emitting contract.
    pub address: Address,
    /// The block hash.
    pub block_hash: B256,
    /// The block number.
    pub block_number: U256,
    /// The unindexed log data.
    pub data: Bytes,
    /// The position of the log in its block.
    pub log_index: U256,
    /// The indexed topics.
    pub topics: Vec<B256>,
    /// The position of the transaction in its block.
    pub transaction_index: U256,
    /// The transaction hash.
    pub transaction_hash: B256,
}

/// Reply of `Validator.FindLogs`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindLogsReply {
    /// The matching logs.
    #[serde(default)]
    pub logs: Vec<LogInfo>,
}

/// Reply of `Validator.GetVMInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVmInfoReply {
    /// The id of the VM the validator runs.
    #[serde(rename = "vmID")]
    pub vm_id: String,
}

/// Reply of `Validator.GetAssertionCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAssertionCountReply {
    /// The number of assertions the validator has made.
    pub assertion_count: u64,
}

/// Reply of `Validator.GetValidatorList`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetValidatorListReply {
    /// The validators of the VM.
    #[serde(default)]
    pub validators: Vec<String>,
}
