#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[macro_use]
extern crate tracing;

mod errors;
pub use errors::{ClientError, ClientResult};

mod types;
pub use types::{
    CallMessageArgs, CallMessageReply, FindLogsArgs, FindLogsReply, GetAssertionCountReply,
    GetMessageResultArgs, GetMessageResultReply, GetValidatorListReply, GetVmInfoReply, LogInfo,
    SendMessageArgs, SendMessageReply,
};

mod provider;
pub use provider::{HttpValidatorProvider, ValidatorProvider};

mod config;
pub use config::{DEFAULT_RPC_TIMEOUT, ValidatorClientConfig};

mod client;
pub use client::{MessageResult, ValidatorClient};
