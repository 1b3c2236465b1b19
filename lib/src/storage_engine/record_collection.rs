// lib/src/storage_engine/record_collection.rs

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use models::errors::{ClinicError, ClinicResult};
use models::{Record, RecordId};

/// Order in which a collection snapshot is returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingOrder {
    /// Oldest record first.
    #[default]
    Insertion,
    /// Most recently registered record first.
    NewestFirst,
}

/// Append-only collection of one record kind. Identifiers are unique within
/// the collection; there is no update or delete.
#[derive(Debug, Clone)]
pub struct RecordCollection<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordCollection<R> {
    fn default() -> Self {
        RecordCollection { records: Vec::new() }
    }
}

impl<R: Record> RecordCollection<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exists(&self, id: RecordId) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    /// Appends `record` unless its identifier is already taken. The check is
    /// repeated here even when the caller has already asked `exists`.
    pub fn insert(&mut self, record: R) -> ClinicResult<()> {
        let id = record.id();
        if self.exists(id) {
            warn!("Rejected duplicate {} ID {}", R::KIND, id);
            return Err(ClinicError::DuplicateId { kind: R::KIND, id });
        }
        self.records.push(record);
        debug!("Stored {} ID {} ({} total)", R::KIND, id, self.records.len());
        Ok(())
    }

    /// A detached copy of the current records.
    pub fn list_all(&self, order: ListingOrder) -> Vec<R> {
        match order {
            ListingOrder::Insertion => self.records.clone(),
            ListingOrder::NewestFirst => self.records.iter().rev().cloned().collect(),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::Doctor;

    fn doctor(id: u32, name: &str) -> Doctor {
        Doctor {
            id: RecordId::new(id).unwrap(),
            name: name.to_string(),
            specialization: "General".to_string(),
        }
    }

    #[test]
    fn distinct_inserts_are_all_kept() {
        let mut doctors = RecordCollection::new();
        for id in 1..=5 {
            doctors.insert(doctor(id, "Doc")).unwrap();
        }
        assert_eq!(doctors.len(), 5);
        for id in 1..=5 {
            assert!(doctors.exists(RecordId::new(id).unwrap()));
        }
        assert!(!doctors.exists(RecordId::new(6).unwrap()));
    }

    #[test]
    fn duplicate_insert_leaves_collection_unchanged() {
        let mut doctors = RecordCollection::new();
        doctors.insert(doctor(5, "First")).unwrap();

        let err = doctors.insert(doctor(5, "Second")).unwrap_err();
        assert!(matches!(err, ClinicError::DuplicateId { id, .. } if id.get() == 5));
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors.get(RecordId::new(5).unwrap()).unwrap().name, "First");
    }

    #[test]
    fn snapshot_respects_listing_order() {
        let mut doctors = RecordCollection::new();
        doctors.insert(doctor(1, "A")).unwrap();
        doctors.insert(doctor(2, "B")).unwrap();
        doctors.insert(doctor(3, "C")).unwrap();

        let ids = |order| -> Vec<u32> {
            doctors.list_all(order).iter().map(|d| d.id.get()).collect()
        };
        assert_eq!(ids(ListingOrder::Insertion), vec![1, 2, 3]);
        assert_eq!(ids(ListingOrder::NewestFirst), vec![3, 2, 1]);
    }

    #[test]
    fn snapshot_is_detached_from_later_inserts() {
        let mut doctors = RecordCollection::new();
        doctors.insert(doctor(1, "A")).unwrap();
        let snapshot = doctors.list_all(ListingOrder::Insertion);
        doctors.insert(doctor(2, "B")).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(doctors.len(), 2);
    }

    #[test]
    fn listing_order_reads_kebab_case() {
        let order: ListingOrder = serde_json::from_str("\"newest-first\"").unwrap();
        assert_eq!(order, ListingOrder::NewestFirst);
        assert_eq!(ListingOrder::default(), ListingOrder::Insertion);
    }
}
