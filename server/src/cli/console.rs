// server/src/cli/console.rs

// Terminal-facing implementations of the input and output capabilities.

use crossterm::{
    cursor,
    style::{self, Color, Stylize},
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use log::warn;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, BufRead, Write};

use lib::workflows::{Field, InputEvent, InputSource, OutputSink};
use models::errors::{ClinicError, ClinicResult};

fn prompt_for(field: Field) -> String {
    match field {
        Field::MenuChoice => "clinic-cli> ".to_string(),
        other => format!("{}: ", other.label()),
    }
}

/// Line-edited input backed by rustyline. Menu choices go into the
/// in-memory history; field answers do not.
pub struct EditorInput {
    editor: DefaultEditor,
}

impl EditorInput {
    pub fn new() -> ClinicResult<Self> {
        let editor = DefaultEditor::new()
            .map_err(|e| ClinicError::Input(format!("Failed to start line editor: {}", e)))?;
        Ok(EditorInput { editor })
    }
}

impl InputSource for EditorInput {
    fn read_field(&mut self, field: Field) -> ClinicResult<InputEvent> {
        match self.editor.readline(&prompt_for(field)) {
            Ok(line) => {
                if field == Field::MenuChoice && !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("Could not record history entry: {}", e);
                    }
                }
                Ok(InputEvent::Line(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(InputEvent::EndOfInput),
            Err(ReadlineError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("Discarding undecodable line: {}", e);
                Ok(InputEvent::Malformed(char::REPLACEMENT_CHARACTER.to_string()))
            }
            #[cfg(windows)]
            Err(ReadlineError::Decode(e)) => {
                warn!("Discarding undecodable line: {}", e);
                Ok(InputEvent::Malformed(char::REPLACEMENT_CHARACTER.to_string()))
            }
            Err(e) => Err(ClinicError::Input(e.to_string())),
        }
    }
}

/// Plain line input from any reader; used when stdin is not a terminal.
pub struct ReaderInput<R: BufRead> {
    reader: R,
    echo_prompts: bool,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R, echo_prompts: bool) -> Self {
        ReaderInput { reader, echo_prompts }
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn read_field(&mut self, field: Field) -> ClinicResult<InputEvent> {
        if self.echo_prompts {
            print!("{}", prompt_for(field));
            io::stdout().flush()?;
        }
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(InputEvent::EndOfInput);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        match String::from_utf8(bytes) {
            Ok(line) => Ok(InputEvent::Line(line)),
            Err(e) => Ok(InputEvent::Malformed(String::from_utf8_lossy(e.as_bytes()).into_owned())),
        }
    }
}

/// Writes results to stdout, colored when enabled.
pub struct ConsoleOutput {
    color: bool,
}

impl ConsoleOutput {
    pub fn new(color: bool) -> Self {
        ConsoleOutput { color }
    }

    fn print_colored(&self, text: &str, color: Color) {
        if self.color {
            println!("{}", style::style(text).with(color));
        } else {
            println!("{}", text);
        }
    }
}

impl OutputSink for ConsoleOutput {
    fn success(&mut self, message: &str) {
        self.print_colored(message, Color::Green);
    }

    fn failure(&mut self, error: &ClinicError) {
        self.print_colored(&error.to_string(), Color::Red);
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        let cleared = stdout
            .execute(Clear(ClearType::All))
            .and_then(|out| out.execute(cursor::MoveTo(0, 0)))
            .map(|_| ());
        if let Err(e) = cleared {
            warn!("Failed to clear terminal: {}", e);
        }
    }
}
