//! Error types for value access and the value wire codec.

use crate::ValueKind;
use alloy_primitives::{U256, hex::FromHexError};
use thiserror::Error;

/// A [Result] type for the [ValueError].
pub type ValueResult<T> = Result<T, ValueError>;

/// An error raised while reading, decoding or unpacking a [`Value`](crate::Value).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The value has a different variant than the accessor requires.
    #[error("expected {expected} value, found {found}")]
    TypeMismatch {
        /// The variant the accessor requires.
        expected: ValueKind,
        /// The variant that was found.
        found: ValueKind,
    },
    /// A positional access past the arity of a tuple.
    #[error("index {index} out of range for tuple of arity {arity}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The arity of the tuple.
        arity: usize,
    },
    /// A tuple does not have the exact arity the reader requires.
    #[error("expected tuple of arity {expected}, found arity {found}")]
    ArityMismatch {
        /// The required arity.
        expected: usize,
        /// The arity that was found.
        found: usize,
    },
    /// A tuple was built with more elements than the value model allows.
    #[error("tuple of arity {0} exceeds the maximum tuple size")]
    TupleTooLarge(usize),
    /// An integer does not fit in the requested width.
    #[error("integer {value} does not fit in {bits} bits")]
    IntOverflow {
        /// The integer that was read.
        value: U256,
        /// The width it had to fit in.
        bits: usize,
    },
    /// A bytestack declares more bytes than its words carry.
    #[error("bytestack declares {size} bytes but only {available} are present")]
    BytestackSize {
        /// The declared length.
        size: usize,
        /// The number of bytes carried by the stacked words.
        available: usize,
    },
    /// The input ended in the middle of a value.
    #[error("unexpected end of input")]
    UnexpectedEof,
    /// The input holds a value kind this model does not carry.
    #[error("unsupported value type code {0}")]
    UnsupportedType(u8),
    /// The input holds a byte that is not a value type code.
    #[error("invalid value type code {0}")]
    InvalidType(u8),
    /// Bytes remain after the root value was read.
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
    /// The hex encoding of a marshalled value is invalid.
    #[error("invalid hex: {0}")]
    Hex(FromHexError),
}
