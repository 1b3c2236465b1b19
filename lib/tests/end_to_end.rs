// lib/tests/end_to_end.rs

use lib::storage_engine::InMemoryStorage;
use lib::workflows::{register, BufferedOutput, ScriptedInput, WorkflowOutcome};
use lib::{list_kind, Appointment, ListingFormat, ListingOrder, Patient, RecordId, RecordKind};

fn id(value: u32) -> RecordId {
    RecordId::new(value).unwrap()
}

#[test]
fn patient_doctor_then_appointment() {
    let mut storage = InMemoryStorage::new();
    let mut output = BufferedOutput::new();
    let mut input = ScriptedInput::new([
        // patient
        "1", "Alice", "01/01/1990", "female",
        // doctor
        "1", "Bob", "Cardiology",
        // appointment
        "1", "1", "1", "15/06/2020",
    ]);

    for kind in [RecordKind::Patient, RecordKind::Doctor, RecordKind::Appointment] {
        let outcome = register(kind, &mut storage, &mut input, &mut output).unwrap();
        assert_eq!(outcome, WorkflowOutcome::Committed(id(1)));
    }

    let appointments = storage.list_all::<Appointment>(ListingOrder::Insertion);
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].patient_id, id(1));
    assert_eq!(appointments[0].doctor_id, id(1));
    assert!(output.failures.is_empty());
    assert_eq!(input.remaining(), 0);

    let lines = list_kind(RecordKind::Appointment, &storage, ListingOrder::Insertion, ListingFormat::Text).unwrap();
    assert_eq!(lines, vec!["ID: 1 | PATIENT ID: 1 | DOCTOR ID: 1 | APPOINTMENT DATE: 15/06/2020"]);
}

#[test]
fn appointment_before_any_patient_is_never_committed() {
    let mut storage = InMemoryStorage::new();
    let mut output = BufferedOutput::new();
    let mut input = ScriptedInput::new(["1", "1", "2", "1"]);

    let outcome = register(RecordKind::Appointment, &mut storage, &mut input, &mut output).unwrap();

    assert_eq!(outcome, WorkflowOutcome::Abandoned);
    assert_eq!(storage.count::<Appointment>(), 0);
    assert_eq!(
        output.failures,
        vec![
            "Error: Patient with ID 1 does not exist.",
            "Error: Patient with ID 1 does not exist.",
        ]
    );
}

#[test]
fn listing_grows_with_each_registration() {
    let mut storage = InMemoryStorage::new();
    let mut output = BufferedOutput::new();

    let empty = list_kind(RecordKind::Patient, &storage, ListingOrder::Insertion, ListingFormat::Text).unwrap();
    assert!(empty.is_empty());

    for n in 1..=4u32 {
        let n = n.to_string();
        let mut input = ScriptedInput::new([n.as_str(), "Someone", "10/10/2000", "male"]);
        register(RecordKind::Patient, &mut storage, &mut input, &mut output).unwrap();
    }

    let lines = list_kind(RecordKind::Patient, &storage, ListingOrder::Insertion, ListingFormat::Text).unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(storage.count::<Patient>(), 4);
    for n in 1..=4u32 {
        assert!(storage.exists::<Patient>(id(n)));
    }
}
