// models/src/medical/mod.rs

pub mod appointment;
pub mod doctor;
pub mod patient;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use patient::{Gender, Patient};
