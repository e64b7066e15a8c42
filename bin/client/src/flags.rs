//! Global arguments for the CLI.

use avm_rpc::{DEFAULT_RPC_TIMEOUT, ValidatorClientConfig};
use clap::{ArgAction, Parser};
use std::time::Duration;
use url::Url;

/// Global arguments for the CLI.
#[derive(Parser, Clone, Debug)]
pub struct GlobalArgs {
    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short = 'v', global = true, action = ArgAction::Count)]
    pub v: u8,
    /// URL of the validator RPC API.
    #[arg(
        long,
        global = true,
        default_value = "http://localhost:1235",
        env = "AVM_VALIDATOR_RPC"
    )]
    pub validator_rpc: Url,
    /// Request timeout in seconds.
    #[arg(long, global = true, env = "AVM_RPC_TIMEOUT")]
    pub rpc_timeout: Option<u64>,
}

impl GlobalArgs {
    /// Returns the [`ValidatorClientConfig`] described by these arguments.
    pub fn client_config(&self) -> ValidatorClientConfig {
        let timeout = self
            .rpc_timeout
            .map_or(Duration::from_millis(DEFAULT_RPC_TIMEOUT), Duration::from_secs);
        ValidatorClientConfig::new(self.validator_rpc.clone()).timeout(timeout)
    }
}
