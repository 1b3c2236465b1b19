// models/src/record.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;

/// The three kinds of record the clinic keeps. Uniqueness of identifiers is
/// enforced per kind.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum RecordKind {
    Patient,
    Doctor,
    Appointment,
}

impl RecordKind {
    /// Plural heading used when a collection is listed.
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Patient => "PATIENTS",
            RecordKind::Doctor => "DOCTORS",
            RecordKind::Appointment => "APPOINTMENTS",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Patient => write!(f, "Patient"),
            RecordKind::Doctor => write!(f, "Doctor"),
            RecordKind::Appointment => write!(f, "Appointment"),
        }
    }
}

/// A stored record: it knows its kind, its identifier and how to lay itself
/// out as labelled fields, identifier first.
pub trait Record: Clone {
    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    /// All fields in declared order, as `(label, value)` pairs.
    fn fields(&self) -> Vec<(&'static str, String)>;
}
