//! Structural hashing of [`Value`] trees.

use crate::{TYPE_CODE_TUPLE, Value};
use alloc::vec::Vec;
use alloy_primitives::{B256, keccak256};

enum Step<'a> {
    Enter(&'a Value),
    Close(usize),
}

impl Value {
    /// Returns the structural hash of this value.
    ///
    /// An integer hashes to `keccak256` of its 32-byte big-endian form. A tuple of arity `n`
    /// hashes to `keccak256(u8(TYPE_CODE_TUPLE + n) || hash(e_0) || .. || hash(e_{n-1}))`.
    pub fn hash(&self) -> B256 {
        let mut steps = alloc::vec![Step::Enter(self)];
        let mut hashes: Vec<B256> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(Self::Int(n)) => hashes.push(keccak256(n.to_be_bytes::<32>())),
                Step::Enter(Self::Tuple(items)) => {
                    steps.push(Step::Close(items.len()));
                    steps.extend(items.iter().rev().map(Step::Enter));
                }
                Step::Close(arity) => {
                    let start = hashes.len().saturating_sub(arity);
                    let mut preimage = Vec::with_capacity(1 + arity * 32);
                    preimage.push(TYPE_CODE_TUPLE + arity as u8);
                    for child in hashes.drain(start..) {
                        preimage.extend_from_slice(child.as_slice());
                    }
                    hashes.push(keccak256(&preimage));
                }
            }
        }
        hashes.pop().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;

    #[test]
    fn test_hash_int() {
        let n = U256::from(5u64);
        assert_eq!(Value::Int(n).hash(), keccak256(n.to_be_bytes::<32>()));
    }

    #[test]
    fn test_hash_empty_tuple() {
        assert_eq!(Value::empty().hash(), keccak256([TYPE_CODE_TUPLE]));
    }

    #[test]
    fn test_hash_tuple_commits_to_children_in_order() {
        let a = Value::from(1u64);
        let b = Value::from(2u64);
        let tuple = Value::pair(a.clone(), b.clone());

        let mut preimage = vec![TYPE_CODE_TUPLE + 2];
        preimage.extend_from_slice(a.hash().as_slice());
        preimage.extend_from_slice(b.hash().as_slice());
        assert_eq!(tuple.hash(), keccak256(&preimage));
        assert_ne!(tuple.hash(), Value::pair(b, a).hash());
    }

    #[test]
    fn test_hash_nested_matches_recursive_definition() {
        let inner = Value::pair(Value::empty(), Value::from(9u64));
        let outer =
            Value::new_tuple(vec![inner.clone(), Value::from(3u64), Value::empty()]).unwrap();

        let mut preimage = vec![TYPE_CODE_TUPLE + 3];
        preimage.extend_from_slice(inner.hash().as_slice());
        preimage.extend_from_slice(Value::from(3u64).hash().as_slice());
        preimage.extend_from_slice(Value::empty().hash().as_slice());
        assert_eq!(outer.hash(), keccak256(&preimage));
    }
}
