//! Contains the client CLI.

use crate::{
    commands::{CallCommand, InfoCommand, LogsCommand, ResultCommand},
    flags::GlobalArgs,
    telemetry::init_tracing_subscriber,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetches and decodes the result of a message.
    Result(ResultCommand),
    /// Executes a read-only call.
    Call(CallCommand),
    /// Searches for logs.
    Logs(LogsCommand),
    /// Shows the VM id, assertion count and validators.
    Info(InfoCommand),
}

/// The AVM validator client CLI.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global arguments for the CLI.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The subcommand to run.
    #[command(subcommand)]
    pub subcommand: Commands,
}

impl Cli {
    /// Runs the CLI.
    pub async fn run(self) -> Result<()> {
        init_tracing_subscriber(self.global.v)?;
        let client = self.global.client_config().build()?;

        match self.subcommand {
            Commands::Result(cmd) => cmd.run(&client).await,
            Commands::Call(cmd) => cmd.run(&client).await,
            Commands::Logs(cmd) => cmd.run(&client).await,
            Commands::Info(cmd) => cmd.run(&client).await,
        }
    }
}

/// Prints `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
