//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts (city entry, API key setup)
//! - Rendering query results in the terminal

use clap::Parser;

mod cli;
mod surface;
mod telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    telemetry::init_tracing(cmd.verbose);
    cmd.run().await
}
