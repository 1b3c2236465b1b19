// lib/src/workflows/mod.rs

//! Registration workflows: prompt for each field, validate, retry, commit.
//!
//! Field-level problems (malformed ID, blank name, bad date, unknown gender)
//! re-ask the same field. A taken ID or an unresolved appointment reference
//! restarts the workflow from the ID prompt. Nothing here terminates the
//! process; only a failing input channel propagates as `Err`.

pub mod appointment;
pub mod doctor;
pub mod input;
pub mod output;
pub mod patient;
pub mod prompt;

pub use appointment::register_appointment;
pub use doctor::register_doctor;
pub use input::{Field, InputEvent, InputSource, ScriptedInput};
pub use output::{BufferedOutput, OutputSink};
pub use patient::register_patient;

use models::errors::ClinicResult;
use models::{RecordId, RecordKind};

use crate::storage_engine::InMemoryStorage;

/// How a registration workflow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// A record with this identifier was stored.
    Committed(RecordId),
    /// Input ended before a record could be stored.
    Abandoned,
}

/// Runs the registration workflow for `kind`.
pub fn register<I, O>(
    kind: RecordKind,
    storage: &mut InMemoryStorage,
    input: &mut I,
    output: &mut O,
) -> ClinicResult<WorkflowOutcome>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    match kind {
        RecordKind::Patient => register_patient(storage, input, output),
        RecordKind::Doctor => register_doctor(storage, input, output),
        RecordKind::Appointment => register_appointment(storage, input, output),
    }
}
