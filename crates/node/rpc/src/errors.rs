//! Errors raised by the validator client.

use avm_protocol::{DecodeError, ResultCode};
use avm_value::ValueError;
use thiserror::Error;

/// A [Result] type for the [ClientError].
pub type ClientResult<T> = Result<T, ClientError>;

/// An error that occurred in the [`crate::ValidatorClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    /// An error occurred while building the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(String),
    /// The request failed or the reply could not be parsed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The validator answered with an error.
    #[error("Validator returned an error: {0}")]
    Rpc(String),
    /// The reply carried neither a result nor an error.
    #[error("Validator reply carried no result")]
    EmptyReply,
    /// The reply carried a value that is not well-formed.
    #[error("Invalid value in reply: {0}")]
    Value(#[from] ValueError),
    /// The reply carried a value that does not decode to a result.
    #[error("Failed to decode result: {0}")]
    Decode(#[from] DecodeError),
    /// A call ended with neither returned data nor a clean stop.
    #[error("Call was reverted: {0:?}")]
    CallReverted(ResultCode),
}
