//! Logs Subcommand

use crate::cli::print_json;
use alloy_primitives::{Address, B256};
use avm_rpc::{ValidatorClient, ValidatorProvider};
use clap::Parser;
use tracing::debug;

/// The `logs` Subcommand
///
/// Prints the logs of a contract between two heights.
///
/// # Usage
///
/// ```sh
/// avm-client logs --from <HEIGHT> --to <HEIGHT> --address <ADDRESS> [--topic <TOPIC>]...
/// ```
#[derive(Parser, Debug, Clone)]
pub struct LogsCommand {
    /// The first height searched.
    #[arg(long)]
    pub from: u64,
    /// The last height searched.
    #[arg(long)]
    pub to: u64,
    /// The emitting contract.
    #[arg(long)]
    pub address: Address,
    /// A topic to match, by position. May be repeated.
    #[arg(long = "topic")]
    pub topics: Vec<B256>,
}

impl LogsCommand {
    /// Runs the subcommand.
    pub async fn run<P: ValidatorProvider>(
        self,
        client: &ValidatorClient<P>,
    ) -> anyhow::Result<()> {
        let logs = client.find_logs(self.from, self.to, self.address, self.topics).await?;
        debug!(target: "avm_client", count = logs.len(), "Found logs");
        print_json(&logs)
    }
}
