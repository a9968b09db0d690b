//! Family member profiles.
//!
//! # Responsibility
//! - Define the family member record and its add-member draft.
//! - Map relationship labels onto badge tones.
//!
//! # Invariants
//! - `age` is a non-negative integer; drafts whose age does not start with
//!   digits are rejected as malformed.
//! - New members start with no conditions, no medications and no appointment.

use crate::model::record::{EntityKind, Record, RecordId};
use crate::model::tone::BadgeTone;
use crate::store::draft::{normalize_field, normalize_name, Draft, FieldCheck, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Placeholder shown until an appointment is linked to a new member.
pub const NO_APPOINTMENT_SCHEDULED: &str = "No appointments scheduled";

/// Family member profile card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    pub id: RecordId,
    pub name: String,
    /// Free-text relationship label; see `Relationship::from_label`.
    pub relationship: String,
    pub age: u32,
    /// Avatar image reference. Empty means "render initials".
    pub avatar: String,
    pub health_conditions: BTreeSet<String>,
    pub emergency_contact: String,
    /// Free-text summary such as `"Cardiology - Dec 28"`.
    pub next_appointment: String,
    pub medication_count: u32,
}

impl FamilyMember {
    /// Categorical relationship derived from the stored label.
    pub fn relationship_kind(&self) -> Relationship {
        Relationship::from_label(&self.relationship)
    }

    /// Avatar fallback text, e.g. `"SJ"` for `"Sarah Johnson"`.
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn has_conditions(&self) -> bool {
        !self.health_conditions.is_empty()
    }
}

impl Record for FamilyMember {
    const KIND: EntityKind = EntityKind::FamilyMember;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Relationship of a member to the account owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relationship {
    #[serde(rename = "Self")]
    Myself,
    Spouse,
    Parent,
    Child,
    Daughter,
    Son,
    Other,
}

impl Relationship {
    /// Options offered by the add-member form, in display order.
    pub const ALL: [Relationship; 7] = [
        Self::Myself,
        Self::Spouse,
        Self::Parent,
        Self::Child,
        Self::Daughter,
        Self::Son,
        Self::Other,
    ];

    /// Parses a stored label. Unknown labels map to `Other`.
    pub fn from_label(value: &str) -> Self {
        match value.trim() {
            "Self" => Self::Myself,
            "Spouse" => Self::Spouse,
            "Parent" => Self::Parent,
            "Child" => Self::Child,
            "Daughter" => Self::Daughter,
            "Son" => Self::Son,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Myself => "Self",
            Self::Spouse => "Spouse",
            Self::Parent => "Parent",
            Self::Child => "Child",
            Self::Daughter => "Daughter",
            Self::Son => "Son",
            Self::Other => "Other",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Myself => BadgeTone::Blue,
            Self::Spouse => BadgeTone::Pink,
            Self::Parent => BadgeTone::Green,
            Self::Child | Self::Daughter | Self::Son => BadgeTone::Purple,
            Self::Other => BadgeTone::Gray,
        }
    }
}

/// Add-member form buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMemberDraft {
    pub name: String,
    pub relationship: String,
    /// Raw age text as typed.
    pub age: String,
    pub emergency_contact: String,
}

impl Draft for FamilyMemberDraft {
    type Output = FamilyMember;

    fn validate(&self) -> Result<(), ValidationError> {
        let age = normalize_field(&self.age);
        FieldCheck::new(EntityKind::FamilyMember)
            .require("name", &self.name)
            .require("relationship", &self.relationship)
            .require("age", &age)
            .malformed_if("age", !age.is_empty() && parse_age(&age).is_none())
            .finish()
    }

    fn build(&self, id: RecordId) -> FamilyMember {
        FamilyMember {
            id,
            name: normalize_name(&self.name),
            relationship: normalize_field(&self.relationship),
            age: parse_age(&self.age).unwrap_or_default(),
            avatar: String::new(),
            health_conditions: BTreeSet::new(),
            emergency_contact: normalize_field(&self.emergency_contact),
            next_appointment: NO_APPOINTMENT_SCHEDULED.to_string(),
            medication_count: 0,
        }
    }

    fn success_message(&self) -> String {
        format!(
            "{} has been added to your family.",
            normalize_name(&self.name)
        )
    }
}

/// Parses the leading integer of an age field (`"34 years"` -> 34).
///
/// Returns `None` when the text does not start with a digit or overflows.
pub fn parse_age(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    let digits_end = trimmed
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(trimmed.len());
    if digits_end == 0 {
        return None;
    }
    trimmed[..digits_end].parse().ok()
}

/// First character of each whitespace-separated word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
