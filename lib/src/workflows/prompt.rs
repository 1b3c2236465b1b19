// lib/src/workflows/prompt.rs

use std::str::FromStr;

use log::debug;

use models::errors::{ClinicError, ClinicResult, ValidationError, ValidationResult};
use models::{Gender, RecordId};

use super::input::{Field, InputEvent, InputSource};
use super::output::OutputSink;
use crate::validation::validate_date;

/// Asks for `field` until `parse` accepts the answer. Each rejection is
/// reported and the same field is asked again. `None` means the input ran
/// out before a valid answer arrived.
pub fn prompt_until_valid<T, I, O, F>(
    input: &mut I,
    output: &mut O,
    field: Field,
    mut parse: F,
) -> ClinicResult<Option<T>>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
    F: FnMut(&str) -> ValidationResult<T>,
{
    loop {
        let text = match input.read_field(field)? {
            InputEvent::Line(text) => text,
            InputEvent::Malformed(text) => {
                debug!("Undecodable {} input {:?}", field, text);
                output.failure(&ValidationError::MalformedInput(text).into());
                continue;
            }
            InputEvent::EndOfInput => {
                debug!("Input ended while waiting for {}", field);
                return Ok(None);
            }
        };
        match parse(&text) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!("Rejected {} input {:?}: {}", field, text, err);
                output.failure(&ClinicError::from(err));
            }
        }
    }
}

/// Expands to the prompted value, or returns `WorkflowOutcome::Abandoned`
/// from the enclosing workflow when input has ended.
macro_rules! prompt_or_abandon {
    ($input:expr, $output:expr, $field:expr, $parse:expr) => {
        match $crate::workflows::prompt::prompt_until_valid($input, $output, $field, $parse)? {
            Some(value) => value,
            None => return Ok($crate::workflows::WorkflowOutcome::Abandoned),
        }
    };
}
pub(crate) use prompt_or_abandon;

pub fn parse_id(text: &str) -> ValidationResult<RecordId> {
    RecordId::from_str(text)
}

pub fn parse_name(text: &str) -> ValidationResult<String> {
    let name = text.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyValue(Field::Name.label()));
    }
    Ok(name.to_string())
}

pub fn parse_date(text: &str) -> ValidationResult<String> {
    let date = text.trim();
    validate_date(date)?;
    Ok(date.to_string())
}

pub fn parse_gender(text: &str) -> ValidationResult<Gender> {
    Gender::from_str(text)
}

pub fn parse_free_text(text: &str) -> ValidationResult<String> {
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::input::ScriptedInput;
    use crate::workflows::output::BufferedOutput;

    #[test]
    fn retries_the_same_field_until_valid() {
        let mut input = ScriptedInput::new(["abc", "0", "7"]);
        let mut output = BufferedOutput::new();

        let id = prompt_until_valid(&mut input, &mut output, Field::Id, parse_id).unwrap();

        assert_eq!(id, Some(RecordId::new(7).unwrap()));
        assert_eq!(input.asked(), &[Field::Id, Field::Id, Field::Id]);
        assert_eq!(output.failures.len(), 2);
    }

    #[test]
    fn end_of_input_yields_none() {
        let mut input = ScriptedInput::new(["not a date"]);
        let mut output = BufferedOutput::new();

        let date = prompt_until_valid(&mut input, &mut output, Field::DateOfBirth, parse_date).unwrap();

        assert_eq!(date, None);
        assert_eq!(output.failures, vec![ValidationError::InvalidDate("not a date".into()).to_string()]);
    }

    struct UndecodableOnce {
        sent: bool,
    }

    impl InputSource for UndecodableOnce {
        fn read_field(&mut self, _field: Field) -> ClinicResult<InputEvent> {
            if self.sent {
                return Ok(InputEvent::Line("3".into()));
            }
            self.sent = true;
            Ok(InputEvent::Malformed("\u{FFFD}\u{FFFD}".into()))
        }
    }

    #[test]
    fn undecodable_line_is_reported_and_reasked() {
        let mut input = UndecodableOnce { sent: false };
        let mut output = BufferedOutput::new();

        let id = prompt_until_valid(&mut input, &mut output, Field::Id, parse_id).unwrap();

        assert_eq!(id, Some(RecordId::new(3).unwrap()));
        assert_eq!(
            output.failures,
            vec![ValidationError::MalformedInput("\u{FFFD}\u{FFFD}".into()).to_string()]
        );
    }

    #[test]
    fn names_are_trimmed_and_required() {
        assert_eq!(parse_name("  Alice "), Ok("Alice".to_string()));
        assert_eq!(parse_name("   "), Err(ValidationError::EmptyValue("NAME")));
    }

    #[test]
    fn dates_are_trimmed_before_validation() {
        assert_eq!(parse_date(" 15/06/2020\t"), Ok("15/06/2020".to_string()));
        assert!(parse_date("15/6/2020").is_err());
    }

    #[test]
    fn free_text_accepts_blank() {
        assert_eq!(parse_free_text("  "), Ok(String::new()));
    }
}
