//! The envelope shared by every validator result.

use crate::{DecodeError, DecodeResult, MessageVariant};
use alloy_primitives::{Address, B256, U256};
use avm_value::Value;

/// The bridge message a result was produced for.
///
/// Decoded from the envelope `[block_number, tx_hash, [type_code, sender, payload]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BridgeMessage {
    /// The height at which the message was applied.
    pub block_number: U256,
    /// The hash of the transaction carrying the message, left padded to 32 bytes.
    pub tx_hash: B256,
    /// The wire type code of the payload, resolved by [`Self::message`].
    pub type_code: U256,
    /// The sender of the message.
    pub sender: Address,
    /// The raw payload, interpreted by [`MessageVariant::decode`].
    pub payload: Value,
    /// The structural hash of [`Self::payload`].
    pub payload_hash: B256,
}

impl BridgeMessage {
    /// Decodes the envelope of a validator result.
    pub fn decode(value: &Value) -> DecodeResult<Self> {
        let [block_number, tx_hash, rest] =
            value.fields::<3>().map_err(DecodeError::MalformedEnvelope)?;
        let [type_code, sender, payload] =
            rest.fields::<3>().map_err(DecodeError::MalformedEnvelope)?;

        payload.as_tuple().map_err(DecodeError::MalformedEnvelope)?;

        Ok(Self {
            block_number: block_number.as_int().map_err(DecodeError::MalformedEnvelope)?,
            tx_hash: tx_hash.as_word().map_err(DecodeError::MalformedEnvelope)?,
            type_code: type_code.as_int().map_err(DecodeError::MalformedEnvelope)?,
            sender: sender.as_address().map_err(DecodeError::MalformedEnvelope)?,
            payload: payload.clone(),
            payload_hash: payload.hash(),
        })
    }

    /// Resolves the typed message carried by the payload.
    pub fn message(&self) -> DecodeResult<MessageVariant> {
        MessageVariant::decode(self.type_code, &self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        SequencedTxMessage,
        test_utils::{TEST_SENDER, TEST_TO, TEST_TX_HASH, envelope, sequenced_tx_envelope},
    };
    use alloy_primitives::Bytes;
    use avm_value::ValueError;
    use rstest::rstest;

    #[test]
    fn test_decode_envelope() {
        let value = sequenced_tx_envelope();
        let bridge = BridgeMessage::decode(&value).unwrap();
        assert_eq!(bridge.block_number, U256::from(100));
        assert_eq!(bridge.tx_hash, TEST_TX_HASH);
        assert_eq!(bridge.type_code, U256::ZERO);
        assert_eq!(bridge.sender, TEST_SENDER);
        assert_eq!(&bridge.payload, value.get(2).unwrap().get(2).unwrap());
        assert_eq!(bridge.payload_hash, bridge.payload.hash());
        assert_eq!(
            bridge.message().unwrap(),
            MessageVariant::SequencedTx(SequencedTxMessage {
                to: TEST_TO,
                sequence_num: U256::from(5),
                amount: U256::from(1000),
                data: Bytes::new(),
            })
        );
    }

    #[test]
    fn test_tx_hash_left_padded() {
        let value = envelope(1, B256::with_last_byte(0x2a), 1, TEST_SENDER, Value::empty());
        let bridge = BridgeMessage::decode(&value).unwrap();
        assert_eq!(bridge.tx_hash, B256::with_last_byte(0x2a));
    }

    #[rstest]
    #[case::two(2)]
    #[case::four(4)]
    fn test_envelope_arity(#[case] arity: usize) {
        let value = Value::new_tuple(vec![Value::from(1u64); arity]).unwrap();
        assert_eq!(
            BridgeMessage::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::ArityMismatch {
                expected: 3,
                found: arity,
            }))
        );
    }

    #[test]
    fn test_inner_arity() {
        let rest = Value::pair(Value::from(0u64), Value::from(TEST_SENDER));
        let value = Value::new_tuple(vec![Value::from(1u64), Value::from(2u64), rest]).unwrap();
        assert_eq!(
            BridgeMessage::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::ArityMismatch { expected: 3, found: 2 }))
        );
    }

    #[test]
    fn test_envelope_not_a_tuple() {
        assert!(matches!(
            BridgeMessage::decode(&Value::from(3u64)),
            Err(DecodeError::MalformedEnvelope(ValueError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_type_code_wider_than_byte() {
        let value = envelope(1, TEST_TX_HASH, 256, TEST_SENDER, Value::empty());
        let bridge = BridgeMessage::decode(&value).unwrap();
        assert_eq!(bridge.type_code, U256::from(256));
        assert_eq!(bridge.message(), Err(DecodeError::UnknownMessageType(U256::from(256))));
    }

    #[test]
    fn test_type_code_must_be_int() {
        let rest = Value::new_tuple(vec![Value::empty(), Value::from(TEST_SENDER), Value::empty()])
            .unwrap();
        let value =
            Value::new_tuple(vec![Value::from(1u64), Value::from(TEST_TX_HASH), rest]).unwrap();
        assert!(matches!(
            BridgeMessage::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_payload_must_be_tuple() {
        let value = envelope(1, TEST_TX_HASH, 1, TEST_SENDER, Value::from(9u64));
        assert!(matches!(
            BridgeMessage::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::TypeMismatch { .. }))
        ));
    }

    #[test]
    fn test_sender_overflow() {
        let mut value = sequenced_tx_envelope();
        let rest = Value::new_tuple(vec![
            Value::from(0u64),
            Value::Int(U256::MAX),
            value.get(2).unwrap().get(2).unwrap().clone(),
        ])
        .unwrap();
        value =
            Value::new_tuple(vec![Value::from(100u64), Value::from(TEST_TX_HASH), rest]).unwrap();
        assert!(matches!(
            BridgeMessage::decode(&value),
            Err(DecodeError::MalformedEnvelope(ValueError::IntOverflow { bits: 160, .. }))
        ));
    }

    #[test]
    fn test_unknown_type_code_decodes_envelope() {
        let value = envelope(1, TEST_TX_HASH, 9, TEST_SENDER, Value::empty());
        let bridge = BridgeMessage::decode(&value).unwrap();
        assert_eq!(bridge.message(), Err(DecodeError::UnknownMessageType(U256::from(9))));
    }
}
