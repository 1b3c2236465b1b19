// server/src/cli/cli.rs

// Entry point of the CLI: resolves configuration and hands control to the
// interactive session.

use anyhow::Result;
use log::info;

use crate::cli::commands::CliArgs;
use crate::cli::config::load_cli_config;
use crate::cli::interactive::run_cli_interactive;

pub fn start_cli(args: CliArgs) -> Result<()> {
    let config = load_cli_config(&args)?;
    info!("Starting clinic CLI for {}", config.clinic_name);
    run_cli_interactive(&config, args.plain)
}
