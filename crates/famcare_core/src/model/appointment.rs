//! Appointment scheduling records.
//!
//! # Responsibility
//! - Define the appointment record, its scheduling form and categorical enums.
//! - Provide lenient calendar-date helpers for derived views.
//!
//! # Invariants
//! - New appointments start as `pending`.
//! - `date` is stored as typed; unparseable dates are kept, never rejected.

use crate::model::record::{EntityKind, Record, RecordId};
use crate::model::tone::BadgeTone;
use crate::store::draft::{
    field_or, normalize_field, normalize_name, Draft, FieldCheck, ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIME: &str = "9:00 AM";
pub const DEFAULT_LOCATION: &str = "TBD";
pub const DEFAULT_PHONE: &str = "TBD";
pub const DEFAULT_DOCTOR: &str = "TBD";

/// Wire format of appointment dates (`2024-01-15`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%A, %B %-d, %Y";
const SHORT_DATE_FORMAT: &str = "%b %-d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: RecordId,
    pub title: String,
    pub doctor: String,
    /// Calendar date as entered, normally `YYYY-MM-DD`.
    pub date: String,
    pub time: String,
    pub person: String,
    pub location: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Parsed calendar date, `None` when the stored text is not `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Long form such as `"Monday, January 15, 2024"`; raw text on parse failure.
    pub fn formatted_date(&self) -> String {
        match self.calendar_date() {
            Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
            None => self.date.clone(),
        }
    }

    pub fn kind(&self) -> AppointmentType {
        AppointmentType::from_label(&self.kind)
    }

    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    pub fn is_active(&self) -> bool {
        self.status != AppointmentStatus::Cancelled
    }
}

impl Record for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Appointment confirmation state. No transition rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Confirmed,
    #[default]
    Pending,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Confirmed => BadgeTone::Green,
            Self::Pending => BadgeTone::Yellow,
            Self::Cancelled => BadgeTone::Red,
        }
    }
}

/// Appointment specialty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    General,
    Cardiology,
    Pediatric,
    Dermatology,
    Orthopedic,
    Ophthalmology,
}

impl AppointmentType {
    /// Options offered by the scheduling form, in display order.
    pub const ALL: [AppointmentType; 6] = [
        Self::General,
        Self::Cardiology,
        Self::Pediatric,
        Self::Dermatology,
        Self::Orthopedic,
        Self::Ophthalmology,
    ];

    /// Parses a type label. Unknown labels map to `General`.
    pub fn from_label(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == value.trim())
            .unwrap_or(Self::General)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Cardiology => "Cardiology",
            Self::Pediatric => "Pediatric",
            Self::Dermatology => "Dermatology",
            Self::Orthopedic => "Orthopedic",
            Self::Ophthalmology => "Ophthalmology",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Cardiology => BadgeTone::Red,
            Self::General | Self::Ophthalmology => BadgeTone::Blue,
            Self::Pediatric => BadgeTone::Purple,
            Self::Dermatology => BadgeTone::Orange,
            Self::Orthopedic => BadgeTone::Green,
        }
    }
}

/// Scheduling form buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub title: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub person: String,
    pub location: String,
    pub phone: String,
    pub kind: String,
    pub notes: String,
}

impl Draft for AppointmentDraft {
    type Output = Appointment;

    fn validate(&self) -> Result<(), ValidationError> {
        FieldCheck::new(EntityKind::Appointment)
            .require("date", &self.date)
            .require("person", &self.person)
            .finish()
    }

    fn build(&self, id: RecordId) -> Appointment {
        let kind = field_or(&self.kind, AppointmentType::General.label());
        Appointment {
            id,
            title: field_or(&self.title, &format!("{kind} Appointment")),
            doctor: field_or(&self.doctor, DEFAULT_DOCTOR),
            date: normalize_field(&self.date),
            time: field_or(&self.time, DEFAULT_TIME),
            person: normalize_name(&self.person),
            location: field_or(&self.location, DEFAULT_LOCATION),
            phone: field_or(&self.phone, DEFAULT_PHONE),
            kind,
            notes: self.notes.trim().to_string(),
            status: AppointmentStatus::Pending,
        }
    }

    fn success_message(&self) -> String {
        format!(
            "Appointment scheduled for {}.",
            normalize_name(&self.person)
        )
    }
}

/// Parses a `YYYY-MM-DD` date, tolerating surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Short card label such as `"Jan 15"`.
pub fn short_date_label(date: NaiveDate) -> String {
    date.format(SHORT_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{parse_date, AppointmentDraft, AppointmentStatus, AppointmentType};
    use crate::model::record::RecordId;
    use crate::model::tone::BadgeTone;
    use crate::store::draft::Draft;

    #[test]
    fn unknown_categories_fall_back_to_defaults() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
        assert_eq!(AppointmentStatus::Confirmed.tone(), BadgeTone::Green);
        assert_eq!(AppointmentType::from_label("Neurology"), AppointmentType::General);
        assert_eq!(AppointmentType::from_label("Neurology").tone(), BadgeTone::Blue);
        assert_eq!(AppointmentType::from_label("Dermatology").tone(), BadgeTone::Orange);
    }

    #[test]
    fn formatted_date_falls_back_to_raw_text() {
        let mut appointment = AppointmentDraft {
            date: "2024-01-15".to_string(),
            person: "Sarah Johnson".to_string(),
            ..AppointmentDraft::default()
        }
        .build(RecordId::new(1));
        assert_eq!(appointment.formatted_date(), "Monday, January 15, 2024");

        appointment.date = "next tuesday".to_string();
        assert_eq!(appointment.formatted_date(), "next tuesday");
        assert!(appointment.calendar_date().is_none());
    }

    #[test]
    fn blank_title_is_derived_from_type() {
        let appointment = AppointmentDraft {
            date: "2024-03-02".to_string(),
            person: "Michael Johnson".to_string(),
            kind: "Dermatology".to_string(),
            ..AppointmentDraft::default()
        }
        .build(RecordId::new(4));
        assert_eq!(appointment.title, "Dermatology Appointment");
        assert_eq!(appointment.doctor, "TBD");
        assert_eq!(appointment.kind(), AppointmentType::Dermatology);
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date(" 2024-02-01 ").is_some());
        assert!(parse_date("02/01/2024").is_none());
        assert!(parse_date("2024-02-30").is_none());
    }
}
