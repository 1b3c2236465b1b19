// models/src/errors.rs

use std::io;
pub use thiserror::Error;

use crate::identifiers::RecordId;
use crate::record::RecordKind;

/// Errors surfaced by the record store, the registration workflows and the
/// command dispatcher. None of them is fatal to the process except the
/// input-channel failures (`Io`, `Input`).
#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("Error: {kind} with ID {id} already exists.")]
    DuplicateId { kind: RecordKind, id: RecordId },

    #[error("Error: {kind} with ID {id} does not exist.")]
    UnknownReference { kind: RecordKind, id: RecordId },

    #[error("Invalid choice '{choice}'. Please enter a valid command.{}", suggestion_hint(.suggestion))]
    InvalidMenuChoice { choice: String, suggestion: Option<String> },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" Did you mean '{}'?", s),
        None => String::new(),
    }
}

/// A field-level validation error.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Non-numeric (or non-positive) text where an identifier was expected.
    #[error("Error: '{0}' is not a valid ID. Please enter a positive whole number.")]
    MalformedInput(String),
    /// Date text failed the layout, range or not-in-the-future checks.
    #[error("Error: '{0}' is not a valid date. Please use DD/MM/YYYY and a date that is not in the future.")]
    InvalidDate(String),
    /// Gender outside the accepted enumeration.
    #[error("Error: '{0}' is not a valid gender. Please enter 'male' or 'female'.")]
    InvalidEnumeration(String),
    /// A required text field was left blank.
    #[error("Error: {0} must not be empty.")]
    EmptyValue(&'static str),
}

/// A type alias for a `Result` that returns a `ClinicError` on failure.
pub type ClinicResult<T> = Result<T, ClinicError>;

/// A type alias for a `Result` that returns a `ValidationError` on failure.
pub type ValidationResult<T> = Result<T, ValidationError>;
