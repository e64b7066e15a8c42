//! The [`Value`] tree and its validating accessors.

use crate::{ValueError, ValueResult};
use alloc::{sync::Arc, vec::Vec};
use alloy_primitives::{Address, B256, U256};

/// The largest arity a tuple may have.
pub const MAX_TUPLE_SIZE: usize = 8;

/// The two variants of a [`Value`], used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValueKind {
    /// An integer.
    #[display("integer")]
    Int,
    /// A tuple.
    #[display("tuple")]
    Tuple,
}

/// A node of the value tree emitted by the virtual machine.
///
/// Tuples share their elements behind an [`Arc`], so cloning a subtree is cheap regardless of its
/// depth. Dropping a tree is iterative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An unsigned 256-bit integer.
    Int(U256),
    /// An ordered tuple of at most [`MAX_TUPLE_SIZE`] values.
    Tuple(Arc<Vec<Value>>),
}

impl Default for Value {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<U256> for Value {
    fn from(value: U256) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Int(U256::from(value))
    }
}

impl From<Address> for Value {
    fn from(address: Address) -> Self {
        Self::Int(U256::from_be_slice(address.as_slice()))
    }
}

impl From<B256> for Value {
    fn from(word: B256) -> Self {
        Self::Int(U256::from_be_bytes(word.0))
    }
}

impl TryFrom<Vec<Self>> for Value {
    type Error = ValueError;

    fn try_from(items: Vec<Self>) -> ValueResult<Self> {
        Self::new_tuple(items)
    }
}

impl Value {
    /// Creates the empty tuple.
    pub fn empty() -> Self {
        Self::Tuple(Arc::new(Vec::new()))
    }

    /// Creates a tuple, failing if it has more than [`MAX_TUPLE_SIZE`] elements.
    pub fn new_tuple(items: Vec<Self>) -> ValueResult<Self> {
        if items.len() > MAX_TUPLE_SIZE {
            return Err(ValueError::TupleTooLarge(items.len()));
        }
        Ok(Self::Tuple(Arc::new(items)))
    }

    /// Creates a cons cell `[tail, head]`.
    pub fn pair(tail: Self, head: Self) -> Self {
        Self::Tuple(Arc::new(alloc::vec![tail, head]))
    }

    /// Encodes `items` as a cons list, so that the first item is the outermost head.
    pub fn cons_list<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        I::IntoIter: DoubleEndedIterator,
    {
        items.into_iter().rev().fold(Self::empty(), Self::pair)
    }

    /// Returns the variant of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Tuple(_) => ValueKind::Tuple,
        }
    }

    /// Returns `true` if this value is the empty tuple.
    pub fn is_empty_tuple(&self) -> bool {
        matches!(self, Self::Tuple(items) if items.is_empty())
    }

    /// Reads this value as an integer.
    pub fn as_int(&self) -> ValueResult<U256> {
        match self {
            Self::Int(value) => Ok(*value),
            Self::Tuple(_) => {
                Err(ValueError::TypeMismatch { expected: ValueKind::Int, found: ValueKind::Tuple })
            }
        }
    }

    /// Reads this value as a tuple of any arity.
    pub fn as_tuple(&self) -> ValueResult<&[Self]> {
        match self {
            Self::Tuple(items) => Ok(items.as_slice()),
            Self::Int(_) => {
                Err(ValueError::TypeMismatch { expected: ValueKind::Tuple, found: ValueKind::Int })
            }
        }
    }

    /// Reads this value as a tuple of exactly `arity` elements.
    pub fn expect_arity(&self, arity: usize) -> ValueResult<&[Self]> {
        let items = self.as_tuple()?;
        if items.len() != arity {
            return Err(ValueError::ArityMismatch { expected: arity, found: items.len() });
        }
        Ok(items)
    }

    /// Reads this value as a tuple of exactly `N` elements, for destructuring.
    pub fn fields<const N: usize>(&self) -> ValueResult<&[Self; N]> {
        let items = self.as_tuple()?;
        items.try_into().map_err(|_| ValueError::ArityMismatch { expected: N, found: items.len() })
    }

    /// Returns the element at `index` of this tuple.
    pub fn get(&self, index: usize) -> ValueResult<&Self> {
        let items = self.as_tuple()?;
        items.get(index).ok_or(ValueError::IndexOutOfRange { index, arity: items.len() })
    }

    /// Reads this value as an integer of at most `bits` bits.
    pub fn as_int_bits(&self, bits: usize) -> ValueResult<U256> {
        let value = self.as_int()?;
        if value.bit_len() > bits {
            return Err(ValueError::IntOverflow { value, bits });
        }
        Ok(value)
    }

    /// Reads this value as a `u64`.
    pub fn as_u64(&self) -> ValueResult<u64> {
        Ok(self.as_int_bits(64)?.as_limbs()[0])
    }

    /// Reads this value as a `usize`.
    pub fn as_usize(&self) -> ValueResult<usize> {
        Ok(self.as_int_bits(usize::BITS as usize)?.as_limbs()[0] as usize)
    }

    /// Reads this value as an address held in the low 160 bits of an integer.
    pub fn as_address(&self) -> ValueResult<Address> {
        Ok(Address::from_word(self.as_word_bits(160)?))
    }

    /// Reads this value as a big-endian 32-byte word.
    pub fn as_word(&self) -> ValueResult<B256> {
        self.as_word_bits(256)
    }

    fn as_word_bits(&self, bits: usize) -> ValueResult<B256> {
        Ok(B256::from(self.as_int_bits(bits)?.to_be_bytes::<32>()))
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let Self::Tuple(items) = self else { return };
        let Some(items) = Arc::get_mut(items) else { return };
        let mut pending = core::mem::take(items);
        while let Some(mut value) = pending.pop() {
            if let Self::Tuple(items) = &mut value {
                if let Some(items) = Arc::get_mut(items) {
                    pending.append(items);
                }
            }
        }
    }
}
