//! Info Subcommand

use crate::cli::print_json;
use avm_rpc::{ValidatorClient, ValidatorProvider};
use clap::Parser;
use serde::Serialize;

/// The `info` Subcommand
///
/// Prints the VM id, the number of assertions made and the validator set.
///
/// # Usage
///
/// ```sh
/// avm-client info
/// ```
#[derive(Parser, Debug, Clone)]
pub struct InfoCommand {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoOutput {
    vm_id: String,
    assertion_count: u64,
    validators: Vec<String>,
}

impl InfoCommand {
    /// Runs the subcommand.
    pub async fn run<P: ValidatorProvider>(
        self,
        client: &ValidatorClient<P>,
    ) -> anyhow::Result<()> {
        let info = InfoOutput {
            vm_id: client.vm_id().await?,
            assertion_count: client.assertion_count().await?,
            validators: client.validator_list().await?,
        };
        print_json(&info)
    }
}
