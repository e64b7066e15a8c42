#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use clap::Parser;

pub mod cli;
pub mod commands;
pub mod flags;
pub mod telemetry;

#[tokio::main]
async fn main() {
    telemetry::enable_backtrace();
    if let Err(err) = cli::Cli::parse().run().await {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
