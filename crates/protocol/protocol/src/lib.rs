#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

mod errors;
pub use errors::{DecodeError, DecodeResult};

mod bridge;
pub use bridge::BridgeMessage;

mod message;
pub use message::{
    CallMessage, ContractTxMessage, EthTransferMessage, MessageType, MessageVariant,
    SequencedTxMessage, TokenKind, TokenTransferMessage,
};

mod log;
pub use log::{LogRecord, decode_logs, flatten_log_list};

mod result;
pub use result::{
    EvmInvalid, EvmReturn, EvmRevert, EvmSequenceMismatch, EvmStop, ExecutionResult, ResultCode,
};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
