// models/src/medical/appointment.rs
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use crate::record::{Record, RecordKind};

/// An appointment between a registered patient and a registered doctor.
/// The references are checked by the registration workflow before the
/// record is built; the record itself carries plain identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub patient_id: RecordId,
    pub doctor_id: RecordId,
    pub appointment_date: String,
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("PATIENT ID", self.patient_id.to_string()),
            ("DOCTOR ID", self.doctor_id.to_string()),
            ("APPOINTMENT DATE", self.appointment_date.clone()),
        ]
    }
}
