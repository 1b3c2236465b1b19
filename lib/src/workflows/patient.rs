// lib/src/workflows/patient.rs

use log::info;

use models::errors::{ClinicError, ClinicResult};
use models::{Patient, RecordKind};

use super::input::{Field, InputSource};
use super::output::OutputSink;
use super::prompt::{parse_date, parse_gender, parse_id, parse_name, prompt_or_abandon};
use super::WorkflowOutcome;
use crate::storage_engine::InMemoryStorage;

/// Registers one patient. A taken ID restarts from the ID prompt; a bad
/// name, date of birth or gender re-asks only that field.
pub fn register_patient<I, O>(
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
        if storage.exists::<Patient>(id) {
            output.failure(&ClinicError::DuplicateId { kind: RecordKind::Patient, id });
            continue;
        }

        let name = prompt_or_abandon!(input, output, Field::Name, parse_name);
        let date_of_birth = prompt_or_abandon!(input, output, Field::DateOfBirth, parse_date);
        let gender = prompt_or_abandon!(input, output, Field::Gender, parse_gender);

        match storage.insert(Patient { id, name, date_of_birth, gender }) {
            Ok(()) => {
                info!("Registered patient {}", id);
                output.success("Successfully registered patient.");
                return Ok(WorkflowOutcome::Committed(id));
            }
            Err(err) => output.failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage_engine::ListingOrder;
    use crate::workflows::input::ScriptedInput;
    use crate::workflows::output::{BufferedOutput, MockOutputSink};
    use models::{Gender, RecordId};

    #[test]
    fn commits_a_valid_patient() {
        let mut storage = InMemoryStorage::new();
        let mut input = ScriptedInput::new(["1", "Alice", "01/01/1990", "female"]);
        let mut output = BufferedOutput::new();

        let outcome = register_patient(&mut storage, &mut input, &mut output).unwrap();

        assert_eq!(outcome, WorkflowOutcome::Committed(RecordId::new(1).unwrap()));
        let patients = storage.list_all::<Patient>(ListingOrder::Insertion);
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].name, "Alice");
        assert_eq!(patients[0].gender, Gender::Female);
        assert_eq!(output.successes, vec!["Successfully registered patient."]);
        assert!(output.failures.is_empty());
    }

    #[test]
    fn bad_fields_are_asked_again_in_place() {
        let mut storage = InMemoryStorage::new();
        let mut input = ScriptedInput::new([
            "x", "2", "", "Carol", "1990-01-01", "01/01/2999", "02/02/1985", "unknown", "Male",
        ]);
        let mut output = BufferedOutput::new();

        let outcome = register_patient(&mut storage, &mut input, &mut output).unwrap();

        assert_eq!(outcome, WorkflowOutcome::Committed(RecordId::new(2).unwrap()));
        assert_eq!(
            input.asked(),
            &[
                Field::Id,
                Field::Id,
                Field::Name,
                Field::Name,
                Field::DateOfBirth,
                Field::DateOfBirth,
                Field::DateOfBirth,
                Field::Gender,
                Field::Gender,
            ]
        );
        assert_eq!(output.failures.len(), 5);
        assert_eq!(storage.count::<Patient>(), 1);
    }

    #[test]
    fn duplicate_id_restarts_from_the_id_prompt() {
        let mut storage = InMemoryStorage::new();
        let mut setup = ScriptedInput::new(["5", "Alice", "01/01/1990", "female"]);
        register_patient(&mut storage, &mut setup, &mut BufferedOutput::new()).unwrap();

        let mut input = ScriptedInput::new(["5", "6", "Dan", "03/03/1970", "male"]);
        let mut output = BufferedOutput::new();
        let outcome = register_patient(&mut storage, &mut input, &mut output).unwrap();

        assert_eq!(outcome, WorkflowOutcome::Committed(RecordId::new(6).unwrap()));
        assert_eq!(input.asked()[..2], [Field::Id, Field::Id]);
        assert_eq!(output.failures, vec!["Error: Patient with ID 5 already exists."]);
        assert_eq!(storage.count::<Patient>(), 2);
    }

    #[test]
    fn second_registration_of_same_id_is_rejected_before_other_fields() {
        let mut storage = InMemoryStorage::new();
        let mut first = ScriptedInput::new(["5", "Alice", "01/01/1990", "female"]);
        register_patient(&mut storage, &mut first, &mut BufferedOutput::new()).unwrap();

        let mut mock = MockOutputSink::new();
        mock.expect_failure()
            .withf(|err| matches!(err, ClinicError::DuplicateId { kind: RecordKind::Patient, id } if id.get() == 5))
            .times(1)
            .return_const(());
        mock.expect_success().never();

        let mut second = ScriptedInput::new(["5"]);
        let outcome = register_patient(&mut storage, &mut second, &mut mock).unwrap();

        assert_eq!(outcome, WorkflowOutcome::Abandoned);
        assert_eq!(storage.count::<Patient>(), 1);
    }

    #[test]
    fn end_of_input_commits_nothing() {
        let mut storage = InMemoryStorage::new();
        let mut input = ScriptedInput::new(["1", "Alice", "01/01/1990"]);
        let mut output = BufferedOutput::new();

        let outcome = register_patient(&mut storage, &mut input, &mut output).unwrap();

        assert_eq!(outcome, WorkflowOutcome::Abandoned);
        assert_eq!(storage.count::<Patient>(), 0);
    }
}
