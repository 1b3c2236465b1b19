// lib/src/workflows/input.rs

use std::collections::VecDeque;
use std::fmt;

use models::errors::ClinicResult;

/// A field a registration workflow asks for. The label doubles as the
/// prompt text shown by the console front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    DateOfBirth,
    Gender,
    Specialization,
    PatientId,
    DoctorId,
    AppointmentDate,
    /// The dispatcher's menu selection.
    MenuChoice,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Id => "ID",
            Field::Name => "NAME",
            Field::DateOfBirth => "DOB",
            Field::Gender => "GENDER",
            Field::Specialization => "SPECIALIZATION",
            Field::PatientId => "PATIENT ID",
            Field::DoctorId => "DOCTOR ID",
            Field::AppointmentDate => "APPOINTMENT DATE",
            Field::MenuChoice => "CHOICE",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What an input source produced for one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    /// A line that could not be decoded as text; carries a lossy rendering
    /// for the error report.
    Malformed(String),
    EndOfInput,
}

/// Supplies raw text for the fields a workflow asks for. Parsing and
/// validation stay with the workflow.
pub trait InputSource {
    fn read_field(&mut self, field: Field) -> ClinicResult<InputEvent>;
}

/// Input replayed from a fixed list of lines; reports end of input once the
/// lines run out.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    asked: Vec<Field>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedInput {
            lines: lines.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Fields requested so far, in order.
    pub fn asked(&self) -> &[Field] {
        &self.asked
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_field(&mut self, field: Field) -> ClinicResult<InputEvent> {
        self.asked.push(field);
        Ok(match self.lines.pop_front() {
            Some(line) => InputEvent::Line(line),
            None => InputEvent::EndOfInput,
        })
    }
}
