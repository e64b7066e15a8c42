//! Reconstruction of event logs from the cons list emitted by the validator.

use crate::{BridgeMessage, DecodeError, DecodeResult};
use alloc::vec::Vec;
use alloy_primitives::{Address, B256, Bytes, Log, LogData, U256};
use avm_value::{Value, ValueError, bytestack_to_bytes};
use tracing::trace;

/// An event emitted while executing a bridge message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct LogRecord {
    /// The emitting contract.
    pub address: Address,
    /// The unindexed log data.
    pub data: Bytes,
    /// The indexed topics, in emission order.
    pub topics: Vec<B256>,
    /// The block number of the owning bridge message.
    pub block_number: U256,
    /// The transaction hash of the owning bridge message. The validator has no separate block
    /// hash to offer.
    pub block_hash: B256,
    /// The transaction hash of the owning bridge message.
    pub transaction_hash: B256,
    /// Always zero.
    pub transaction_index: u64,
    /// The position of the log in its list.
    pub log_index: u64,
    /// The position of the log in its list.
    pub transaction_log_index: u64,
    /// Always `false`.
    pub removed: bool,
}

impl LogRecord {
    /// Projects a raw `[address, data, topics..]` entry at position `index` of the log list
    /// emitted for `owner`.
    pub fn project(value: &Value, index: usize, owner: &BridgeMessage) -> DecodeResult<Self> {
        let entry = |source| DecodeError::MalformedLogEntry { index, source };

        let fields = value.as_tuple().map_err(entry)?;
        let [address, data, topics @ ..] = fields else {
            return Err(entry(ValueError::ArityMismatch { expected: 2, found: fields.len() }));
        };
        let topics =
            topics.iter().map(Value::as_word).collect::<Result<Vec<_>, _>>().map_err(entry)?;

        Ok(Self {
            address: address.as_address().map_err(entry)?,
            data: bytestack_to_bytes(data).map_err(entry)?,
            topics,
            block_number: owner.block_number,
            block_hash: owner.tx_hash,
            transaction_hash: owner.tx_hash,
            transaction_index: 0,
            log_index: index as u64,
            transaction_log_index: index as u64,
            removed: false,
        })
    }

    /// Converts this record into a primitive [`Log`], dropping the position metadata.
    pub fn as_primitive(&self) -> Log {
        Log {
            address: self.address,
            data: LogData::new_unchecked(self.topics.clone(), self.data.clone()),
        }
    }
}

/// Flattens a cons list `[tail, head]` terminated by the empty tuple.
///
/// The outermost head is the first element of the result.
pub fn flatten_log_list(list: &Value) -> DecodeResult<Vec<&Value>> {
    let mut entries = Vec::new();
    let mut node = list;
    loop {
        match node.as_tuple().map_err(DecodeError::MalformedLogList)? {
            [] => break,
            [tail, head] => {
                entries.push(head);
                node = tail;
            }
            other => {
                return Err(DecodeError::MalformedLogList(ValueError::ArityMismatch {
                    expected: 2,
                    found: other.len(),
                }));
            }
        }
    }
    Ok(entries)
}

/// Decodes every log of a raw log list emitted for `owner`.
pub fn decode_logs(list: &Value, owner: &BridgeMessage) -> DecodeResult<Vec<LogRecord>> {
    let entries = flatten_log_list(list)?;
    trace!(
        target: "decoder",
        count = entries.len(),
        tx_hash = %owner.tx_hash,
        "Flattened log list"
    );
    entries
        .into_iter()
        .enumerate()
        .map(|(index, value)| LogRecord::project(value, index, owner))
        .collect()
}
