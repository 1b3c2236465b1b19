// models/src/medical/doctor.rs
use serde::{Deserialize, Serialize};

use crate::identifiers::RecordId;
use crate::record::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: RecordId,
    pub name: String,
    pub specialization: String,
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> RecordId {
        self.id
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("NAME", self.name.clone()),
            ("SPECIALIZATION", self.specialization.clone()),
        ]
    }
}
