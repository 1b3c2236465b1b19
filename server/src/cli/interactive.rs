// server/src/cli/interactive.rs

// This file handles the interactive CLI mode: reading menu choices and
// dispatching them to the registration workflows and listings.

use anyhow::Result;
use log::{debug, info};
use std::io::{self, IsTerminal};

use lib::workflows::{register, Field, InputEvent, InputSource, OutputSink, WorkflowOutcome};
use lib::{ClinicConfig, InMemoryStorage};
use models::errors::{ClinicError, ClinicResult};

use crate::cli::commands::{parse_menu_choice, MenuChoice};
use crate::cli::console::{ConsoleOutput, EditorInput, ReaderInput};
use crate::cli::handlers::{display_records, print_farewell, print_menu, print_welcome_screen, registration_header};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    ExitCommand,
    EndOfInput,
}

/// Runs the menu loop until the exit choice or end of input. Invalid
/// choices are reported and the menu is shown again.
pub fn run_session<I, O>(
    storage: &mut InMemoryStorage,
    config: &ClinicConfig,
    input: &mut I,
    output: &mut O,
) -> ClinicResult<SessionEnd>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    print_menu(output);
    loop {
        let text = match input.read_field(Field::MenuChoice)? {
            InputEvent::Line(text) => text,
            InputEvent::Malformed(text) => {
                output.failure(&ClinicError::InvalidMenuChoice { choice: text, suggestion: None });
                print_menu(output);
                continue;
            }
            InputEvent::EndOfInput => {
                print_farewell(config, output);
                return Ok(SessionEnd::EndOfInput);
            }
        };
        if text.trim().is_empty() {
            continue;
        }

        let choice = match parse_menu_choice(&text) {
            Ok(choice) => choice,
            Err(err) => {
                output.failure(&err);
                print_menu(output);
                continue;
            }
        };
        debug!("Menu choice {:?}", choice);

        match choice {
            MenuChoice::Register(kind) => {
                output.line(&registration_header(kind));
                if register(kind, storage, input, output)? == WorkflowOutcome::Abandoned {
                    print_farewell(config, output);
                    return Ok(SessionEnd::EndOfInput);
                }
                output.line("Returning to the menu...");
            }
            MenuChoice::List(kind) => {
                display_records(kind, storage, config, output);
                output.line("Returning to the menu...");
            }
            MenuChoice::Help => {}
            MenuChoice::Clear => output.clear(),
            MenuChoice::Exit => {
                print_farewell(config, output);
                return Ok(SessionEnd::ExitCommand);
            }
        }
        print_menu(output);
    }
}

/// Main loop for the CLI interactive mode. Uses the line editor on a
/// terminal and plain line reads otherwise (or when `plain` is set).
pub fn run_cli_interactive(config: &ClinicConfig, plain: bool) -> Result<()> {
    let mut storage = InMemoryStorage::new();
    let mut output = ConsoleOutput::new(config.color);

    if config.show_banner {
        print_welcome_screen(config);
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal() && !plain;
    let end = if interactive {
        let mut input = EditorInput::new()?;
        run_session(&mut storage, config, &mut input, &mut output)?
    } else {
        let mut input = ReaderInput::new(stdin.lock(), true);
        run_session(&mut storage, config, &mut input, &mut output)?
    };

    info!(
        "Session ended ({:?}) with {} patient(s), {} doctor(s), {} appointment(s)",
        end,
        storage.patients().len(),
        storage.doctors().len(),
        storage.appointments().len()
    );
    Ok(())
}
