//! Record identity shared by every entity store.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-local record identifier.
///
/// Allocated from a monotonic counter, so an id is never handed out twice by
/// the same store even if records are later removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wraps a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Which screen-level entity a record or draft belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    FamilyMember,
    Medication,
    Appointment,
}

impl EntityKind {
    /// Stable metadata label used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FamilyMember => "family_member",
            Self::Medication => "medication",
            Self::Appointment => "appointment",
        }
    }

    /// Human-readable entity name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FamilyMember => "family member",
            Self::Medication => "medication",
            Self::Appointment => "appointment",
        }
    }
}

/// Anything an `EntityStore` can hold.
pub trait Record: Clone {
    /// Entity kind of this record type.
    const KIND: EntityKind;

    /// Identifier assigned when the record was committed.
    fn id(&self) -> RecordId;
}
