// lib/src/workflows/appointment.rs

use log::info;

use models::errors::{ClinicError, ClinicResult};
use models::{Appointment, Doctor, Patient, RecordKind};

use super::input::{Field, InputSource};
use super::output::OutputSink;
use super::prompt::{parse_date, parse_id, prompt_or_abandon};
use super::WorkflowOutcome;
use crate::storage_engine::InMemoryStorage;

/// Registers one appointment. The patient and doctor references are
/// resolved against the storage as soon as each is entered; a missing
/// reference, like a taken appointment ID, restarts from the ID prompt.
pub fn register_appointment<I, O>(
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
        if storage.exists::<Appointment>(id) {
            output.failure(&ClinicError::DuplicateId { kind: RecordKind::Appointment, id });
            continue;
        }

        let patient_id = prompt_or_abandon!(input, output, Field::PatientId, parse_id);
        if !storage.exists::<Patient>(patient_id) {
            output.failure(&ClinicError::UnknownReference { kind: RecordKind::Patient, id: patient_id });
            continue;
        }

        let doctor_id = prompt_or_abandon!(input, output, Field::DoctorId, parse_id);
        if !storage.exists::<Doctor>(doctor_id) {
            output.failure(&ClinicError::UnknownReference { kind: RecordKind::Doctor, id: doctor_id });
            continue;
        }

        let appointment_date = prompt_or_abandon!(input, output, Field::AppointmentDate, parse_date);

        let appointment = Appointment { id, patient_id, doctor_id, appointment_date };
        match storage.insert(appointment) {
            Ok(()) => {
                info!("Registered appointment {} (patient {}, doctor {})", id, patient_id, doctor_id);
                output.success("Successfully registered appointment.");
                return Ok(WorkflowOutcome::Committed(id));
            }
            Err(err) => output.failure(&err),
        }
    }
}
