//! The bytestack convention for carrying byte strings inside a value tree.
//!
//! A bytestack is the pair `[size, stack]`. `stack` is a cons list of `[rest, word]` cells holding
//! 32-byte big-endian words, with the final chunk of the byte string on top.

use crate::{Value, ValueError, ValueResult};
use alloc::vec::Vec;
use alloy_primitives::{Bytes, U256};

const WORD_LEN: usize = 32;

/// Unpacks the byte string carried by a bytestack value.
pub fn bytestack_to_bytes(value: &Value) -> ValueResult<Bytes> {
    let fields = value.expect_arity(2)?;
    let size = fields[0].as_usize()?;

    let mut words = Vec::new();
    let mut cell = &fields[1];
    loop {
        match cell.as_tuple()? {
            [] => break,
            [rest, word] => {
                words.push(word.as_int()?);
                cell = rest;
            }
            other => return Err(ValueError::ArityMismatch { expected: 2, found: other.len() }),
        }
    }

    let available = words.len() * WORD_LEN;
    if size > available {
        return Err(ValueError::BytestackSize { size, available });
    }

    let mut out = Vec::with_capacity(available);
    for word in words.iter().rev() {
        out.extend_from_slice(&word.to_be_bytes::<WORD_LEN>());
    }
    out.truncate(size);
    Ok(out.into())
}

/// Packs `data` into its canonical bytestack value. The last chunk is right-padded with zeros.
pub fn bytes_to_bytestack(data: &[u8]) -> Value {
    let stack = data.chunks(WORD_LEN).fold(Value::empty(), |rest, chunk| {
        let mut word = [0u8; WORD_LEN];
        word[..chunk.len()].copy_from_slice(chunk);
        Value::pair(rest, Value::Int(U256::from_be_bytes(word)))
    });
    Value::pair(Value::from(data.len() as u64), stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_bytestack() {
        let value = bytes_to_bytestack(&[]);
        assert_eq!(value, Value::pair(Value::from(0u64), Value::empty()));
        assert!(bytestack_to_bytes(&value).unwrap().is_empty());
    }

    #[test]
    fn test_top_word_is_last_chunk() {
        let data: Vec<u8> = (0u8..40).collect();
        let value = bytes_to_bytestack(&data);
        let top = value.get(1).unwrap().get(1).unwrap().as_word().unwrap();
        assert_eq!(top[..8], data[32..]);
        assert!(top[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_size_exceeds_words() {
        let value = Value::pair(
            Value::from(33u64),
            Value::pair(Value::empty(), Value::from(1u64)),
        );
        assert_eq!(
            bytestack_to_bytes(&value),
            Err(ValueError::BytestackSize { size: 33, available: 32 })
        );
    }

    #[test]
    fn test_malformed_cell() {
        let cell =
            Value::new_tuple(vec![Value::empty(), Value::from(1u64), Value::from(2u64)]).unwrap();
        let value = Value::pair(Value::from(1u64), cell);
        assert_eq!(
            bytestack_to_bytes(&value),
            Err(ValueError::ArityMismatch { expected: 2, found: 3 })
        );
    }

    #[test]
    fn test_size_not_integer() {
        let value = Value::pair(Value::empty(), Value::empty());
        assert!(matches!(bytestack_to_bytes(&value), Err(ValueError::TypeMismatch { .. })));
    }

    proptest! {
        #[test]
        fn test_bytestack_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let value = bytes_to_bytestack(&data);
            prop_assert_eq!(&bytestack_to_bytes(&value).unwrap()[..], data.as_slice());
        }
    }
}
