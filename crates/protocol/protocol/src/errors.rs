//! Error types for result decoding.

use crate::MessageType;
use alloy_primitives::U256;
use avm_value::ValueError;
use thiserror::Error;

/// A [Result] type for the [DecodeError].
pub type DecodeResult<T> = Result<T, DecodeError>;

/// An error raised when a value tree does not conform to the validator's result layout.
///
/// Every variant is permanent: the response cannot be interpreted and retrying the decode will
/// not change the outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The bridge envelope or its inner `[type, sender, payload]` tuple is malformed.
    #[error("Malformed bridge envelope: {0}")]
    MalformedEnvelope(#[source] ValueError),
    /// The payload does not match the layout of its message type.
    #[error("Malformed payload for message type {message_type:?}: {source}")]
    MalformedPayload {
        /// The message type named by the wire code.
        message_type: MessageType,
        /// The failing access.
        #[source]
        source: ValueError,
    },
    /// The envelope carries a type code with no message variant.
    #[error("Unknown message type: {0}")]
    UnknownMessageType(U256),
    /// A node of the log cons list is malformed.
    #[error("Malformed log list: {0}")]
    MalformedLogList(#[source] ValueError),
    /// A log entry in the list is malformed.
    #[error("Malformed log entry at index {index}: {source}")]
    MalformedLogEntry {
        /// The position of the entry in the list.
        index: usize,
        /// The failing access.
        #[source]
        source: ValueError,
    },
    /// The result carries a code with no result variant.
    #[error("Unknown result code: {0}")]
    UnknownResultCode(U256),
    /// The outer result tuple is malformed.
    #[error("Malformed result: {0}")]
    MalformedResult(#[source] ValueError),
    /// The returned data is not a valid bytestack.
    #[error("Malformed return data: {0}")]
    MalformedReturnData(#[source] ValueError),
}
