//! Call Subcommand

use crate::cli::print_json;
use alloy_primitives::{Address, Bytes};
use avm_rpc::{ValidatorClient, ValidatorProvider};
use clap::Parser;
use serde::Serialize;

/// The `call` Subcommand
///
/// Executes a read-only call and prints the returned data.
///
/// # Usage
///
/// ```sh
/// avm-client call --contract <ADDRESS> --sender <ADDRESS> [--data <HEX>]
/// ```
#[derive(Parser, Debug, Clone)]
pub struct CallCommand {
    /// The called contract.
    #[arg(long)]
    pub contract: Address,
    /// The account the call is made from.
    #[arg(long)]
    pub sender: Address,
    /// The hex-encoded call data.
    #[arg(long, default_value = "0x")]
    pub data: Bytes,
}

#[derive(Serialize)]
struct CallOutput {
    data: Bytes,
}

impl CallCommand {
    /// Runs the subcommand.
    pub async fn run<P: ValidatorProvider>(
        self,
        client: &ValidatorClient<P>,
    ) -> anyhow::Result<()> {
        let data = client.call(self.contract, self.sender, self.data).await?;
        print_json(&CallOutput { data })
    }
}
