//! Display-only dashboard samples.
//!
//! Nothing here is mutated after construction.

use crate::model::record::RecordId;
use crate::model::tone::BadgeTone;
use serde::{Deserialize, Serialize};

/// What a reminder is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Medication,
    Appointment,
}

impl ReminderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::Appointment => "appointment",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Medication => BadgeTone::Blue,
            Self::Appointment => BadgeTone::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: RecordId,
    #[serde(rename = "type")]
    pub kind: ReminderKind,
    pub name: String,
    pub time: String,
    pub person: String,
}

/// Progress-bar metric, `value` in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMetric {
    pub name: String,
    pub value: u8,
    pub tone: BadgeTone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Completed,
    Pending,
}

impl ActivityStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Completed => BadgeTone::Green,
            Self::Pending => BadgeTone::Yellow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub id: RecordId,
    pub action: String,
    pub person: String,
    /// Relative time text such as `"2 hours ago"`.
    pub time: String,
    pub status: ActivityStatus,
}

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub todays_medications: u32,
    pub upcoming_appointments: u32,
    pub active_reminders: u32,
}
