// lib/src/lib.rs

//! Core of the clinic records manager: the in-memory record store, the date
//! validator, the registration workflows and the listings. The console front
//! end lives in the `server` crate and talks to this crate through
//! [`workflows::InputSource`] and [`workflows::OutputSink`].

pub mod config;
pub mod listing;
pub mod storage_engine;
pub mod validation;
pub mod workflows;

pub use models::{
    Appointment, ClinicError, ClinicResult, Doctor, Gender, Patient, Record, RecordId, RecordKind,
    ValidationError,
};

pub use crate::config::{load_clinic_config, ClinicConfig};
pub use crate::listing::{list_kind, list_records, ListingFormat};
pub use crate::storage_engine::{InMemoryStorage, ListingOrder};
pub use crate::validation::{is_valid_date, validate_date};
pub use crate::workflows::{register, WorkflowOutcome};
