// models/src/identifiers.rs

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// A record identifier. Identifiers are positive integers, unique within
/// the collection of a single record kind; a patient and a doctor may share
/// the same numeric value.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RecordId(u32);

impl RecordId {
    /// Creates a new identifier.
    ///
    /// # Errors
    /// Returns `ValidationError::MalformedInput` if `value` is zero.
    pub fn new(value: u32) -> ValidationResult<Self> {
        if value == 0 {
            return Err(ValidationError::MalformedInput(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    /// Parses trimmed decimal text. Anything that is not a whole number in
    /// `1..=u32::MAX` is malformed.
    fn from_str(s: &str) -> ValidationResult<Self> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| ValidationError::MalformedInput(trimmed.to_string()))?;
        Self::new(value).map_err(|_| ValidationError::MalformedInput(trimmed.to_string()))
    }
}

impl TryFrom<u32> for RecordId {
    type Error = ValidationError;

    fn try_from(value: u32) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl From<RecordId> for u32 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
