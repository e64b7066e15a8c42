//! Binary wire codec for [`Value`] trees.
//!
//! A marshalled value is a type byte followed by its body. Integers carry a 32-byte big-endian
//! body; a tuple of arity `n` is tagged `TYPE_CODE_TUPLE + n` and followed by its elements in
//! order.

use crate::{MAX_TUPLE_SIZE, Value, ValueError, ValueResult};
use alloc::vec::Vec;
use alloy_primitives::{U256, hex};

/// Type byte of an integer.
pub const TYPE_CODE_INT: u8 = 0;
/// Type byte of a code point. Not carried by this model.
pub const TYPE_CODE_CODE_POINT: u8 = 1;
/// Type byte of a hash-only stub. Not carried by this model.
pub const TYPE_CODE_HASH_ONLY: u8 = 2;
/// Type byte of the empty tuple; a tuple of arity `n` is tagged `TYPE_CODE_TUPLE + n`.
pub const TYPE_CODE_TUPLE: u8 = 3;

const INT_BODY_LEN: usize = 32;

/// A tuple being filled while unmarshalling.
struct Frame {
    arity: usize,
    items: Vec<Value>,
}

impl Value {
    /// Decodes a value from its hex-encoded wire form. A `0x` prefix is optional.
    pub fn from_hex(input: &str) -> ValueResult<Self> {
        let bytes = hex::decode(input.trim()).map_err(ValueError::Hex)?;
        Self::unmarshal(&bytes)
    }

    /// Decodes a value from its wire form, rejecting trailing bytes.
    pub fn unmarshal(bytes: &[u8]) -> ValueResult<Self> {
        let mut buf = bytes;
        let value = Self::read(&mut buf)?;
        if !buf.is_empty() {
            return Err(ValueError::TrailingBytes(buf.len()));
        }
        Ok(value)
    }

    /// Reads one value from the front of `buf`, advancing it past the value.
    pub fn read(buf: &mut &[u8]) -> ValueResult<Self> {
        let mut frames: Vec<Frame> = Vec::new();
        loop {
            let mut value = match take_byte(buf)? {
                TYPE_CODE_INT => Self::Int(U256::from_be_slice(take(buf, INT_BODY_LEN)?)),
                code @ (TYPE_CODE_CODE_POINT | TYPE_CODE_HASH_ONLY) => {
                    return Err(ValueError::UnsupportedType(code));
                }
                code if usize::from(code - TYPE_CODE_TUPLE) <= MAX_TUPLE_SIZE => {
                    let arity = usize::from(code - TYPE_CODE_TUPLE);
                    if arity > 0 {
                        frames.push(Frame { arity, items: Vec::with_capacity(arity) });
                        continue;
                    }
                    Self::empty()
                }
                code => return Err(ValueError::InvalidType(code)),
            };

            // Attach the completed value to its parents, closing every tuple it fills.
            loop {
                let Some(mut frame) = frames.pop() else { return Ok(value) };
                frame.items.push(value);
                if frame.items.len() < frame.arity {
                    frames.push(frame);
                    break;
                }
                value = Self::new_tuple(frame.items)?;
            }
        }
    }

    /// Encodes this value into its wire form.
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.marshal_into(&mut out);
        out
    }

    /// Appends the wire form of this value to `out`.
    pub fn marshal_into(&self, out: &mut Vec<u8>) {
        let mut pending = alloc::vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Self::Int(n) => {
                    out.push(TYPE_CODE_INT);
                    out.extend_from_slice(&n.to_be_bytes::<INT_BODY_LEN>());
                }
                Self::Tuple(items) => {
                    out.push(TYPE_CODE_TUPLE + items.len() as u8);
                    pending.extend(items.iter().rev());
                }
            }
        }
    }
}

fn take_byte(buf: &mut &[u8]) -> ValueResult<u8> {
    let (first, rest) = buf.split_first().ok_or(ValueError::UnexpectedEof)?;
    *buf = rest;
    Ok(*first)
}

fn take<'a>(buf: &mut &'a [u8], len: usize) -> ValueResult<&'a [u8]> {
    if buf.len() < len {
        return Err(ValueError::UnexpectedEof);
    }
    let (head, rest) = buf.split_at(len);
    *buf = rest;
    Ok(head)
}
