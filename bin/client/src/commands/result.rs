//! Result Subcommand

use crate::cli::print_json;
use alloy_primitives::B256;
use avm_rpc::{ValidatorClient, ValidatorProvider};
use clap::Parser;
use tracing::info;

/// The `result` Subcommand
///
/// Prints the decoded result of a message and its proof metadata, or `null` if the validator
/// has not processed the message.
///
/// # Usage
///
/// ```sh
/// avm-client result <TX_HASH>
/// ```
#[derive(Parser, Debug, Clone)]
pub struct ResultCommand {
    /// The hash of the transaction that carried the message.
    pub tx_hash: B256,
}

impl ResultCommand {
    /// Runs the subcommand.
    pub async fn run<P: ValidatorProvider>(
        self,
        client: &ValidatorClient<P>,
    ) -> anyhow::Result<()> {
        let result = client.get_message_result(self.tx_hash).await?;
        if result.is_none() {
            info!(target: "avm_client", tx_hash = %self.tx_hash, "No result for message");
        }
        print_json(&result)
    }
}
