// lib/src/workflows/doctor.rs

use log::info;

use models::errors::{ClinicError, ClinicResult};
use models::{Doctor, RecordKind};

use super::input::{Field, InputSource};
use super::output::OutputSink;
use super::prompt::{parse_free_text, parse_id, parse_name, prompt_or_abandon};
use super::WorkflowOutcome;
use crate::storage_engine::InMemoryStorage;

pub fn register_doctor<I, O>(
    storage: &mut InMemoryStorage,
    input: &mut I,
    output: &mut O,
) -> ClinicResult<WorkflowOutcome>
where
    I: InputSource + ?Sized,
    O: OutputSink + ?Sized,
{
    loop {
        let id = prompt_or_abandon!(input, output, Field::Id, parse_id);
        if storage.exists::<Doctor>(id) {
            output.failure(&ClinicError::DuplicateId { kind: RecordKind::Doctor, id });
            continue;
        }

        let name = prompt_or_abandon!(input, output, Field::Name, parse_name);
        let specialization = prompt_or_abandon!(input, output, Field::Specialization, parse_free_text);

        match storage.insert(Doctor { id, name, specialization }) {
            Ok(()) => {
                info!("Registered doctor {}", id);
                output.success("Successfully registered doctor.");
                return Ok(WorkflowOutcome::Committed(id));
            }
            Err(err) => output.failure(&err),
        }
    }
}
