// server/src/cli/mod.rs

// This file declares the modules within the 'cli' directory and re-exports
// the pieces `main.rs` and the tests reach for.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod handlers;
pub mod interactive;

pub use cli::start_cli;
pub use commands::{parse_menu_choice, CliArgs, MenuChoice};
pub use config::load_cli_config;
pub use console::{ConsoleOutput, EditorInput, ReaderInput};
pub use interactive::{run_cli_interactive, run_session, SessionEnd};
