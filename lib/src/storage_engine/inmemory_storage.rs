// lib/src/storage_engine/inmemory_storage.rs

use models::errors::ClinicResult;
use models::{Appointment, Doctor, Patient, Record, RecordId, RecordKind};

use super::record_collection::{ListingOrder, RecordCollection};

/// Owner of every record registered during the process lifetime. Nothing is
/// written to disk; dropping the storage drops the records.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    patients: RecordCollection<Patient>,
    doctors: RecordCollection<Doctor>,
    appointments: RecordCollection<Appointment>,
}

/// Maps a record type to its collection inside [`InMemoryStorage`].
pub trait StoredRecord: Record + Sized {
    fn collection(storage: &InMemoryStorage) -> &RecordCollection<Self>;
    fn collection_mut(storage: &mut InMemoryStorage) -> &mut RecordCollection<Self>;
}

impl StoredRecord for Patient {
    fn collection(storage: &InMemoryStorage) -> &RecordCollection<Self> {
        &storage.patients
    }
    fn collection_mut(storage: &mut InMemoryStorage) -> &mut RecordCollection<Self> {
        &mut storage.patients
    }
}

impl StoredRecord for Doctor {
    fn collection(storage: &InMemoryStorage) -> &RecordCollection<Self> {
        &storage.doctors
    }
    fn collection_mut(storage: &mut InMemoryStorage) -> &mut RecordCollection<Self> {
        &mut storage.doctors
    }
}

impl StoredRecord for Appointment {
    fn collection(storage: &InMemoryStorage) -> &RecordCollection<Self> {
        &storage.appointments
    }
    fn collection_mut(storage: &mut InMemoryStorage) -> &mut RecordCollection<Self> {
        &mut storage.appointments
    }
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists<R: StoredRecord>(&self, id: RecordId) -> bool {
        R::collection(self).exists(id)
    }

    /// Stores `record`, failing with `DuplicateId` if its kind already holds
    /// the identifier. Appointment references are not checked here.
    pub fn insert<R: StoredRecord>(&mut self, record: R) -> ClinicResult<()> {
        R::collection_mut(self).insert(record)
    }

    pub fn list_all<R: StoredRecord>(&self, order: ListingOrder) -> Vec<R> {
        R::collection(self).list_all(order)
    }

    pub fn count<R: StoredRecord>(&self) -> usize {
        R::collection(self).len()
    }

    /// Count by kind, for status lines that are not typed.
    pub fn count_of(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Patient => self.patients.len(),
            RecordKind::Doctor => self.doctors.len(),
            RecordKind::Appointment => self.appointments.len(),
        }
    }

    pub fn patients(&self) -> &RecordCollection<Patient> {
        &self.patients
    }

    pub fn doctors(&self) -> &RecordCollection<Doctor> {
        &self.doctors
    }

    pub fn appointments(&self) -> &RecordCollection<Appointment> {
        &self.appointments
    }
}
