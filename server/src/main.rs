// server/src/main.rs

// This is the main entry point for the clinic CLI application.
// It handles command-line argument parsing, logging setup, and dispatches
// to the CLI logic.

use anyhow::Result;
use clap::Parser;
use clinic_server::cli::{start_cli, CliArgs};

fn main() -> Result<()> {
    let args = CliArgs::parse();

    // RUST_LOG wins over --verbose when both are present.
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    start_cli(args)
}
