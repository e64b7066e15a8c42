//! Builders for validator result trees, used in tests.
//!
//! Every builder goes through [`Value::new_tuple`] and panics on a tuple wider than
//! [`avm_value::MAX_TUPLE_SIZE`], so a tree built here is always one the codec accepts.

use alloc::{vec, vec::Vec};
use alloy_primitives::{Address, B256, address, b256};
use avm_value::{Value, bytes_to_bytestack};

/// The sender used by [`sequenced_tx_envelope`].
pub const TEST_SENDER: Address = address!("0x5fbdb2315678afecb367f032d93f642f64180aa3");

/// The destination used by [`sequenced_tx_envelope`].
pub const TEST_TO: Address = address!("0xe7f1725e7734ce288f8367e1bb143e90bb3f0512");

/// The transaction hash used by [`sequenced_tx_envelope`].
pub const TEST_TX_HASH: B256 =
    b256!("0x000000000000000000000000000000000000000000000000000000000000abcd");

fn tuple(items: Vec<Value>) -> Value {
    match Value::new_tuple(items) {
        Ok(value) => value,
        Err(err) => panic!("invalid test tuple: {err}"),
    }
}

/// Builds a bridge envelope `[block_number, tx_hash, [type_code, sender, payload]]`.
pub fn envelope(
    block_number: u64,
    tx_hash: B256,
    type_code: u64,
    sender: Address,
    payload: Value,
) -> Value {
    let rest = tuple(vec![Value::from(type_code), Value::from(sender), payload]);
    tuple(vec![Value::from(block_number), Value::from(tx_hash), rest])
}

/// The envelope of a sequenced transaction at block 100 moving 1000 wei with sequence number 5
/// and no call data.
pub fn sequenced_tx_envelope() -> Value {
    let payload = tuple(vec![
        Value::from(TEST_TO),
        Value::from(5u64),
        Value::from(1000u64),
        bytes_to_bytestack(&[]),
    ]);
    envelope(100, TEST_TX_HASH, 0, TEST_SENDER, payload)
}

/// Builds a raw log entry `[address, data, topics..]`.
///
/// # Panics
///
/// Panics if more than six topics are given, since the entry would not fit in a tuple.
pub fn log_value(address: Address, data: &[u8], topics: &[B256]) -> Value {
    let mut fields = Vec::with_capacity(2 + topics.len());
    fields.push(Value::from(address));
    fields.push(bytes_to_bytestack(data));
    fields.extend(topics.iter().copied().map(Value::from));
    tuple(fields)
}

/// Builds a result tuple `[envelope, logs, data, code]`.
pub fn result_value(envelope: Value, logs: Vec<Value>, data: &[u8], code: u64) -> Value {
    tuple(vec![envelope, Value::cons_list(logs), bytes_to_bytestack(data), Value::from(code)])
}
