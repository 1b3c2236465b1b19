// lib/src/storage_engine/mod.rs

//! The in-memory record store. Each record kind lives in its own
//! append-only `RecordCollection`; `InMemoryStorage` owns all three.

pub mod inmemory_storage;
pub mod record_collection;

pub use inmemory_storage::{InMemoryStorage, StoredRecord};
pub use record_collection::{ListingOrder, RecordCollection};
