// lib/src/validation/mod.rs

pub mod date;

pub use date::{is_valid_date, is_valid_date_on, validate_date, DATE_LAYOUT};
