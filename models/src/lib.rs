// models/src/lib.rs

//! Shared record types and the error taxonomy of the clinic records manager.

pub mod errors;
pub mod identifiers;
pub mod medical;
pub mod record;

pub use errors::{ClinicError, ClinicResult, ValidationError, ValidationResult};
pub use identifiers::RecordId;
pub use medical::{Appointment, Doctor, Gender, Patient};
pub use record::{Record, RecordKind};
