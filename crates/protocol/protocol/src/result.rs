//! Execution results returned by the validator.

use crate::{BridgeMessage, DecodeError, DecodeResult, LogRecord, MessageVariant, decode_logs};
use alloc::vec::Vec;
use alloy_primitives::{Bytes, U256};
use avm_value::{Value, bytestack_to_bytes};
use tracing::debug;

/// The outcome codes of executing a bridge message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ResultCode {
    /// Execution reverted.
    Revert = 0,
    /// The message could not be executed.
    Invalid = 1,
    /// Execution returned data.
    Return = 2,
    /// Execution stopped without returning data.
    Stop = 3,
    /// The message was rejected for carrying the wrong sequence number.
    SequenceMismatch = 4,
}

impl TryFrom<U256> for ResultCode {
    type Error = DecodeError;

    fn try_from(code: U256) -> DecodeResult<Self> {
        match code.try_into() {
            Ok(0u8) => Ok(Self::Revert),
            Ok(1) => Ok(Self::Invalid),
            Ok(2) => Ok(Self::Return),
            Ok(3) => Ok(Self::Stop),
            Ok(4) => Ok(Self::SequenceMismatch),
            _ => Err(DecodeError::UnknownResultCode(code)),
        }
    }
}

/// A message whose execution returned data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EvmReturn {
    /// The envelope of the executed message.
    pub bridge_data: BridgeMessage,
    /// The executed message.
    pub orig: MessageVariant,
    /// The returned data.
    pub data: Bytes,
    /// The emitted logs.
    pub logs: Vec<LogRecord>,
}

/// A message whose execution reverted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EvmRevert {
    /// The envelope of the executed message.
    pub bridge_data: BridgeMessage,
    /// The executed message.
    pub orig: MessageVariant,
    /// The revert data.
    pub data: Bytes,
}

/// A message whose execution stopped without returning data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EvmStop {
    /// The envelope of the executed message.
    pub bridge_data: BridgeMessage,
    /// The executed message.
    pub orig: MessageVariant,
    /// The emitted logs.
    pub logs: Vec<LogRecord>,
}

/// A message rejected for carrying the wrong sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EvmSequenceMismatch {
    /// The envelope of the rejected message.
    pub bridge_data: BridgeMessage,
    /// The rejected message.
    pub orig: MessageVariant,
}

/// A message that could not be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EvmInvalid {
    /// The envelope of the rejected message.
    pub bridge_data: BridgeMessage,
    /// The rejected message.
    pub orig: MessageVariant,
}

/// The decoded result of executing a bridge message.
///
/// Decoded from the tuple `[envelope, logs, data, code]`. Only the parts a variant carries are
/// read, so a [`ResultCode::Invalid`] result with a malformed log list still decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "returnType", rename_all = "camelCase")
)]
pub enum ExecutionResult {
    /// Execution returned data.
    Return(EvmReturn),
    /// Execution reverted.
    Revert(EvmRevert),
    /// Execution stopped.
    Stop(EvmStop),
    /// Rejected for a sequence number mismatch.
    SequenceMismatch(EvmSequenceMismatch),
    /// Rejected as invalid.
    Invalid(EvmInvalid),
}

impl ExecutionResult {
    /// Decodes a result tuple.
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        let [envelope, raw_logs, raw_data, code] =
            value.fields::<4>().map_err(DecodeError::MalformedResult)?;

        let bridge_data = BridgeMessage::decode(envelope)?;
        let orig = bridge_data.message()?;
        let code = ResultCode::try_from(code.as_int().map_err(DecodeError::MalformedResult)?)?;
        debug!(
            target: "decoder",
            ?code,
            tx_hash = %bridge_data.tx_hash,
            message_type = ?orig.message_type(),
            "Decoding execution result"
        );

        let data = || bytestack_to_bytes(raw_data).map_err(DecodeError::MalformedReturnData);
        let result = match code {
            ResultCode::Return => {
                let logs = decode_logs(raw_logs, &bridge_data)?;
                Self::Return(EvmReturn { data: data()?, logs, bridge_data, orig })
            }
            ResultCode::Revert => Self::Revert(EvmRevert { data: data()?, bridge_data, orig }),
            ResultCode::Stop => {
                let logs = decode_logs(raw_logs, &bridge_data)?;
                Self::Stop(EvmStop { logs, bridge_data, orig })
            }
            ResultCode::SequenceMismatch => {
                Self::SequenceMismatch(EvmSequenceMismatch { bridge_data, orig })
            }
            ResultCode::Invalid => Self::Invalid(EvmInvalid { bridge_data, orig }),
        };
        Ok(result)
    }

    /// Returns the result code of this variant.
    pub const fn code(&self) -> ResultCode {
        match self {
            Self::Return(_) => ResultCode::Return,
            Self::Revert(_) => ResultCode::Revert,
            Self::Stop(_) => ResultCode::Stop,
            Self::SequenceMismatch(_) => ResultCode::SequenceMismatch,
            Self::Invalid(_) => ResultCode::Invalid,
        }
    }

    /// Returns the envelope of the executed message.
    pub const fn bridge_data(&self) -> &BridgeMessage {
        match self {
            Self::Return(result) => &result.bridge_data,
            Self::Revert(result) => &result.bridge_data,
            Self::Stop(result) => &result.bridge_data,
            Self::SequenceMismatch(result) => &result.bridge_data,
            Self::Invalid(result) => &result.bridge_data,
        }
    }

    /// Returns the executed message.
    pub const fn orig(&self) -> &MessageVariant {
        match self {
            Self::Return(result) => &result.orig,
            Self::Revert(result) => &result.orig,
            Self::Stop(result) => &result.orig,
            Self::SequenceMismatch(result) => &result.orig,
            Self::Invalid(result) => &result.orig,
        }
    }

    /// Returns the returned or revert data, if this variant carries any.
    pub const fn data(&self) -> Option<&Bytes> {
        match self {
            Self::Return(result) => Some(&result.data),
            Self::Revert(result) => Some(&result.data),
            _ => None,
        }
    }

    /// Returns the emitted logs, or an empty slice if this variant carries none.
    pub fn logs(&self) -> &[LogRecord] {
        match self {
            Self::Return(result) => &result.logs,
            Self::Stop(result) => &result.logs,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SequencedTxMessage,
        test_utils::{
            TEST_SENDER, TEST_TO, TEST_TX_HASH, envelope, log_value, result_value,
            sequenced_tx_envelope,
        },
    };
    use alloy_primitives::{Address, B256, address};
    use avm_value::{ValueError, bytes_to_bytestack};
    use rstest::rstest;

    const EMITTER: Address = address!("0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0");

    fn sequenced_tx() -> MessageVariant {
        MessageVariant::SequencedTx(SequencedTxMessage {
            to: TEST_TO,
            sequence_num: U256::from(5),
            amount: U256::from(1000),
            data: Bytes::new(),
        })
    }

    fn two_logs() -> Vec<Value> {
        vec![
            log_value(EMITTER, &[0xaa], &[B256::with_last_byte(1)]),
            log_value(EMITTER, &[0xbb], &[]),
        ]
    }

    #[test]
    fn test_decode_return() {
        let value = result_value(sequenced_tx_envelope(), two_logs(), &[0x12, 0x34], 2);
        let result = ExecutionResult::decode(&value).unwrap();

        let ExecutionResult::Return(ret) = &result else { panic!("expected return: {result:?}") };
        assert_eq!(ret.orig, sequenced_tx());
        assert_eq!(ret.data, Bytes::from_static(&[0x12, 0x34]));
        assert_eq!(ret.bridge_data.block_number, U256::from(100));
        assert_eq!(ret.bridge_data.sender, TEST_SENDER);
        assert_eq!(ret.logs.len(), 2);
        assert_eq!(ret.logs[0].data, Bytes::from_static(&[0xaa]));
        assert_eq!(ret.logs[0].topics, vec![B256::with_last_byte(1)]);
        assert_eq!(ret.logs[1].data, Bytes::from_static(&[0xbb]));
        assert_eq!(ret.logs[1].log_index, 1);
        assert!(ret.logs.iter().all(|log| log.transaction_hash == TEST_TX_HASH));

        assert_eq!(result.code(), ResultCode::Return);
        assert_eq!(result.orig(), &sequenced_tx());
        assert_eq!(result.logs().len(), 2);
        assert_eq!(result.data(), Some(&Bytes::from_static(&[0x12, 0x34])));
    }

    #[test]
    fn test_decode_revert() {
        let value = result_value(sequenced_tx_envelope(), two_logs(), b"nope", 0);
        let result = ExecutionResult::decode(&value).unwrap();
        let expected = EvmRevert {
            bridge_data: BridgeMessage::decode(&sequenced_tx_envelope()).unwrap(),
            orig: sequenced_tx(),
            data: Bytes::from_static(b"nope"),
        };
        assert_eq!(result, ExecutionResult::Revert(expected));
        assert!(result.logs().is_empty());
    }

    #[test]
    fn test_decode_stop() {
        let value = result_value(sequenced_tx_envelope(), two_logs(), &[], 3);
        let result = ExecutionResult::decode(&value).unwrap();
        let ExecutionResult::Stop(stop) = &result else { panic!("expected stop: {result:?}") };
        assert_eq!(stop.logs.len(), 2);
        assert_eq!(result.data(), None);
    }

    #[test]
    fn test_decode_sequence_mismatch() {
        let value = result_value(sequenced_tx_envelope(), vec![], &[], 4);
        let result = ExecutionResult::decode(&value).unwrap();
        assert_eq!(
            result,
            ExecutionResult::SequenceMismatch(EvmSequenceMismatch {
                bridge_data: BridgeMessage::decode(&sequenced_tx_envelope()).unwrap(),
                orig: sequenced_tx(),
            })
        );
    }

    #[test]
    fn test_decode_invalid_ignores_logs() {
        let value = Value::new_tuple(vec![
            sequenced_tx_envelope(),
            Value::from(1u64),
            Value::from(2u64),
            Value::from(1u64),
        ])
        .unwrap();
        let result = ExecutionResult::decode(&value).unwrap();
        assert_eq!(result.code(), ResultCode::Invalid);
        assert_eq!(result.bridge_data().tx_hash, TEST_TX_HASH);
    }

    #[rstest]
    #[case::revert(0, ResultCode::Revert)]
    #[case::invalid(1, ResultCode::Invalid)]
    #[case::ret(2, ResultCode::Return)]
    #[case::stop(3, ResultCode::Stop)]
    #[case::sequence_mismatch(4, ResultCode::SequenceMismatch)]
    fn test_result_codes(#[case] code: u64, #[case] expected: ResultCode) {
        let value = result_value(sequenced_tx_envelope(), vec![], &[], code);
        assert_eq!(ExecutionResult::decode(&value).unwrap().code(), expected);
    }

    #[rstest]
    #[case(5)]
    #[case(9)]
    #[case(256)]
    fn test_unknown_result_code(#[case] code: u64) {
        let value = result_value(sequenced_tx_envelope(), vec![], &[], code);
        assert_eq!(
            ExecutionResult::decode(&value),
            Err(DecodeError::UnknownResultCode(U256::from(code)))
        );
    }

    #[test]
    fn test_result_arity() {
        let value = Value::new_tuple(vec![sequenced_tx_envelope(), Value::empty(), Value::empty()])
            .unwrap();
        assert_eq!(
            ExecutionResult::decode(&value),
            Err(DecodeError::MalformedResult(ValueError::ArityMismatch { expected: 4, found: 3 }))
        );
    }

    #[test]
    fn test_result_code_not_an_integer() {
        let value = Value::new_tuple(vec![
            sequenced_tx_envelope(),
            Value::empty(),
            bytes_to_bytestack(&[]),
            Value::empty(),
        ])
        .unwrap();
        assert!(matches!(
            ExecutionResult::decode(&value),
            Err(DecodeError::MalformedResult(ValueError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_malformed_return_data() {
        let value = Value::new_tuple(vec![
            sequenced_tx_envelope(),
            Value::empty(),
            Value::pair(Value::from(64u64), Value::empty()),
            Value::from(2u64),
        ])
        .unwrap();
        assert_eq!(
            ExecutionResult::decode(&value),
            Err(DecodeError::MalformedReturnData(ValueError::BytestackSize {
                size: 64,
                available: 0,
            }))
        );
    }

    #[test]
    fn test_envelope_error_propagates() {
        let value = result_value(Value::empty(), vec![], &[], 2);
        assert_eq!(
            ExecutionResult::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::ArityMismatch { expected: 3, found: 0 }))
        );
    }

    #[rstest]
    #[case::past_last_type(6)]
    #[case::wider_than_byte(256)]
    fn test_unknown_message_type_propagates(#[case] type_code: u64) {
        let envelope = envelope(1, TEST_TX_HASH, type_code, TEST_SENDER, Value::empty());
        let value = result_value(envelope, vec![], &[], 2);
        assert_eq!(
            ExecutionResult::decode(&value),
            Err(DecodeError::UnknownMessageType(U256::from(type_code)))
        );
    }

    #[test]
    fn test_malformed_log_propagates() {
        let value = result_value(sequenced_tx_envelope(), vec![Value::from(1u64)], &[], 3);
        assert!(matches!(
            ExecutionResult::decode(&value),
            Err(DecodeError::MalformedLogEntry { index: 0, .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tagged() {
        let value = result_value(sequenced_tx_envelope(), vec![], &[], 4);
        let result = ExecutionResult::decode(&value).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["returnType"], "sequenceMismatch");
        assert_eq!(json["orig"]["type"], "sequencedTx");
        assert_eq!(json["bridgeData"]["blockNumber"], "0x64");
        let back: ExecutionResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }
}
