//! Medication tracking records.
//!
//! # Responsibility
//! - Define the medication record, its add form and per-record status.
//!
//! # Invariants
//! - New medications start untaken and due `"Today <time>"`.
//! - `taken` is the only field that changes after creation.

use crate::model::record::{EntityKind, Record, RecordId};
use crate::model::tone::BadgeTone;
use crate::store::draft::{
    field_or, normalize_field, normalize_name, Draft, FieldCheck, ValidationError,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FREQUENCY: &str = "Once daily";
pub const DEFAULT_TIME: &str = "8:00 AM";
pub const DEFAULT_CONDITION: &str = "General";

/// Frequency options offered by the add form.
pub const FREQUENCY_OPTIONS: [&str; 4] = [
    "Once daily",
    "Twice daily",
    "Three times daily",
    "As needed",
];

const DUE_TODAY_MARKER: &str = "Today";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: RecordId,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    /// Free-text family member name.
    pub person: String,
    pub taken: bool,
    /// Free text such as `"Today 8:00 PM"` or `"As needed"`.
    pub next_due: String,
    pub condition: String,
}

impl Medication {
    /// Whether the next dose falls on the current day.
    pub fn is_due_today(&self) -> bool {
        self.next_due.contains(DUE_TODAY_MARKER)
    }

    /// Untaken and due today.
    pub fn is_pending_today(&self) -> bool {
        !self.taken && self.is_due_today()
    }

    pub fn status(&self) -> MedicationStatus {
        if self.taken {
            MedicationStatus::Taken
        } else if self.is_due_today() {
            MedicationStatus::DueNow
        } else {
            MedicationStatus::Scheduled
        }
    }

    /// Copy of this record with `taken` flipped.
    pub fn with_taken_toggled(&self) -> Self {
        Self {
            taken: !self.taken,
            ..self.clone()
        }
    }
}

impl Record for Medication {
    const KIND: EntityKind = EntityKind::Medication;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Display status of one medication card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    Taken,
    DueNow,
    Scheduled,
}

impl MedicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Taken => "Taken",
            Self::DueNow => "Due Now",
            Self::Scheduled => "Scheduled",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Taken => BadgeTone::Green,
            Self::DueNow => BadgeTone::Red,
            Self::Scheduled => BadgeTone::Yellow,
        }
    }
}

/// Add-medication form buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationDraft {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub person: String,
    pub condition: String,
}

impl Draft for MedicationDraft {
    type Output = Medication;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldCheck::new(EntityKind::Medication)
            .require("name", &self.name)
            .require("dosage", &self.dosage)
            .require("person", &self.person)
            .finish()
    }

    fn build(&self, id: RecordId) -> Medication {
        let time = field_or(&self.time, DEFAULT_TIME);
        Medication {
            id,
            name: normalize_name(&self.name),
            dosage: normalize_field(&self.dosage),
            frequency: field_or(&self.frequency, DEFAULT_FREQUENCY),
            next_due: format!("{DUE_TODAY_MARKER} {time}"),
            time,
            person: normalize_name(&self.person),
            taken: false,
            condition: field_or(&self.condition, DEFAULT_CONDITION),
        }
    }

    fn success_message(&self) -> String {
        format!(
            "{} has been added to medication list.",
            normalize_name(&self.name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{MedicationDraft, MedicationStatus};
    use crate::model::record::RecordId;
    use crate::model::tone::BadgeTone;
    use crate::store::draft::Draft;

    #[test]
    fn build_applies_defaults_for_blank_optional_fields() {
        let draft = MedicationDraft {
            name: "Vitamin D".to_string(),
            dosage: "1000 IU".to_string(),
            person: "Emma Johnson".to_string(),
            ..MedicationDraft::default()
        };
        let medication = draft.build(RecordId::new(5));
        assert_eq!(medication.frequency, "Once daily");
        assert_eq!(medication.time, "8:00 AM");
        assert_eq!(medication.next_due, "Today 8:00 AM");
        assert_eq!(medication.condition, "General");
        assert!(!medication.taken);
    }

    #[test]
    fn next_due_follows_entered_time() {
        let draft = MedicationDraft {
            name: "Metformin".to_string(),
            dosage: "500mg".to_string(),
            person: "Sarah Johnson".to_string(),
            time: "20:00".to_string(),
            ..MedicationDraft::default()
        };
        assert_eq!(draft.build(RecordId::new(1)).next_due, "Today 20:00");
    }

    #[test]
    fn status_prefers_taken_then_due_today() {
        let mut medication = MedicationDraft {
            name: "A".to_string(),
            dosage: "1".to_string(),
            person: "B".to_string(),
            ..MedicationDraft::default()
        }
        .build(RecordId::new(1));
        assert_eq!(medication.status(), MedicationStatus::DueNow);
        assert_eq!(medication.status().tone(), BadgeTone::Red);

        medication.next_due = "As needed".to_string();
        assert_eq!(medication.status(), MedicationStatus::Scheduled);

        medication.taken = true;
        assert_eq!(medication.status().label(), "Taken");
    }
}
