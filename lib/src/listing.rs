// lib/src/listing.rs

//! Read-only listings of the stored collections, one line per record.

use serde::{Deserialize, Serialize};

use models::errors::{ClinicError, ClinicResult};
use models::{Appointment, Doctor, Patient, Record, RecordKind};

use crate::storage_engine::{InMemoryStorage, ListingOrder, StoredRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingFormat {
    /// `ID: 1 | NAME: Alice | ...`
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Formats a single record on one line.
pub fn format_record<R: Record + Serialize>(record: &R, format: ListingFormat) -> ClinicResult<String> {
    match format {
        ListingFormat::Text => Ok(record
            .fields()
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join(" | ")),
        ListingFormat::Json => serde_json::to_string(record)
            .map_err(|e| ClinicError::SerializationError(format!("Failed to encode {}: {}", R::KIND, e))),
    }
}

/// Lines for every stored record of type `R`. An empty collection gives an
/// empty vector.
pub fn list_records<R>(storage: &InMemoryStorage, order: ListingOrder, format: ListingFormat) -> ClinicResult<Vec<String>>
where
    R: StoredRecord + Serialize,
{
    storage
        .list_all::<R>(order)
        .iter()
        .map(|record| format_record(record, format))
        .collect()
}

pub fn list_kind(
    kind: RecordKind,
    storage: &InMemoryStorage,
    order: ListingOrder,
    format: ListingFormat,
) -> ClinicResult<Vec<String>> {
    match kind {
        RecordKind::Patient => list_records::<Patient>(storage, order, format),
        RecordKind::Doctor => list_records::<Doctor>(storage, order, format),
        RecordKind::Appointment => list_records::<Appointment>(storage, order, format),
    }
}
