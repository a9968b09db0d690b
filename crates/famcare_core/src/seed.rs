//! Static sample data for a fresh session.
//!
//! Identifiers are `1..=n` in list order.

use crate::model::appointment::{Appointment, AppointmentStatus};
use crate::model::dashboard::{
    ActivityEntry, ActivityStatus, DashboardOverview, HealthMetric, Reminder, ReminderKind,
};
use crate::model::family::FamilyMember;
use crate::model::medication::Medication;
use crate::model::record::RecordId;
use crate::model::tone::BadgeTone;

/// Names offered by the person pickers on the medication and appointment
/// forms. Not kept in sync with the family store.
pub const FAMILY_MEMBER_OPTIONS: [&str; 3] =
    ["Sarah Johnson", "Michael Johnson", "Emma Johnson"];

pub fn sample_family_members() -> Vec<FamilyMember> {
    vec![
        member(
            1,
            "Sarah Johnson",
            "Self",
            34,
            &["Diabetes", "Hypertension"],
            "+1 (555) 123-4567",
            "Cardiology - Dec 28",
            3,
        ),
        member(
            2,
            "Michael Johnson",
            "Spouse",
            36,
            &["Asthma"],
            "+1 (555) 123-4567",
            "General Checkup - Jan 5",
            1,
        ),
        member(
            3,
            "Emma Johnson",
            "Daughter",
            8,
            &[],
            "+1 (555) 987-6543",
            "Pediatric Checkup - Jan 12",
            0,
        ),
    ]
}

pub fn sample_medications() -> Vec<Medication> {
    vec![
        medication(
            1,
            "Lisinopril",
            "10mg",
            "Once daily",
            "8:00 AM",
            "Sarah Johnson",
            true,
            "Tomorrow 8:00 AM",
            "Hypertension",
        ),
        medication(
            2,
            "Metformin",
            "500mg",
            "Twice daily",
            "8:00 AM, 8:00 PM",
            "Sarah Johnson",
            false,
            "Today 8:00 PM",
            "Diabetes",
        ),
        medication(
            3,
            "Albuterol Inhaler",
            "2 puffs",
            "As needed",
            "When needed",
            "Michael Johnson",
            false,
            "As needed",
            "Asthma",
        ),
        medication(
            4,
            "Children's Tylenol",
            "80mg",
            "As needed",
            "When needed",
            "Emma Johnson",
            false,
            "As needed",
            "Pain/Fever",
        ),
    ]
}

pub fn sample_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: RecordId::new(1),
            title: "Cardiology Checkup".to_string(),
            doctor: "Dr. Smith".to_string(),
            date: "2024-01-15".to_string(),
            time: "2:00 PM".to_string(),
            person: "Sarah Johnson".to_string(),
            location: "Heart Center, Room 201".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            kind: "Cardiology".to_string(),
            notes: "Regular checkup for hypertension management".to_string(),
            status: AppointmentStatus::Confirmed,
        },
        Appointment {
            id: RecordId::new(2),
            title: "General Physical".to_string(),
            doctor: "Dr. Johnson".to_string(),
            date: "2024-01-22".to_string(),
            time: "10:00 AM".to_string(),
            person: "Michael Johnson".to_string(),
            location: "Family Medicine, Room 105".to_string(),
            phone: "+1 (555) 234-5678".to_string(),
            kind: "General".to_string(),
            notes: "Annual physical examination".to_string(),
            status: AppointmentStatus::Pending,
        },
        Appointment {
            id: RecordId::new(3),
            title: "Pediatric Checkup".to_string(),
            doctor: "Dr. Williams".to_string(),
            date: "2024-01-28".to_string(),
            time: "3:30 PM".to_string(),
            person: "Emma Johnson".to_string(),
            location: "Pediatric Clinic, Room 302".to_string(),
            phone: "+1 (555) 345-6789".to_string(),
            kind: "Pediatric".to_string(),
            notes: "Routine checkup and vaccination updates".to_string(),
            status: AppointmentStatus::Confirmed,
        },
    ]
}

pub fn sample_reminders() -> Vec<Reminder> {
    vec![
        reminder(1, ReminderKind::Medication, "Blood Pressure Pill", "8:00 AM", "Mom"),
        reminder(2, ReminderKind::Appointment, "Cardiology Checkup", "2:00 PM", "Dad"),
        reminder(3, ReminderKind::Medication, "Vitamin D", "6:00 PM", "Sarah"),
    ]
}

pub fn sample_metrics() -> Vec<HealthMetric> {
    vec![
        metric("Medication Adherence", 85, BadgeTone::Green),
        metric("Appointment Attendance", 92, BadgeTone::Blue),
        metric("Health Goals Progress", 78, BadgeTone::Purple),
    ]
}

pub fn sample_activity() -> Vec<ActivityEntry> {
    vec![
        activity(1, "Medication taken", "Mom", "2 hours ago", ActivityStatus::Completed),
        activity(2, "Blood pressure logged", "Dad", "4 hours ago", ActivityStatus::Completed),
        activity(3, "Appointment reminder sent", "Sarah", "6 hours ago", ActivityStatus::Pending),
    ]
}

pub fn sample_overview() -> DashboardOverview {
    DashboardOverview {
        todays_medications: 12,
        upcoming_appointments: 3,
        active_reminders: 7,
    }
}

#[allow(clippy::too_many_arguments)]
fn member(
    id: u64,
    name: &str,
    relationship: &str,
    age: u32,
    conditions: &[&str],
    emergency_contact: &str,
    next_appointment: &str,
    medication_count: u32,
) -> FamilyMember {
    FamilyMember {
        id: RecordId::new(id),
        name: name.to_string(),
        relationship: relationship.to_string(),
        age,
        avatar: String::new(),
        health_conditions: conditions.iter().map(|value| value.to_string()).collect(),
        emergency_contact: emergency_contact.to_string(),
        next_appointment: next_appointment.to_string(),
        medication_count,
    }
}

#[allow(clippy::too_many_arguments)]
fn medication(
    id: u64,
    name: &str,
    dosage: &str,
    frequency: &str,
    time: &str,
    person: &str,
    taken: bool,
    next_due: &str,
    condition: &str,
) -> Medication {
    Medication {
        id: RecordId::new(id),
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
        time: time.to_string(),
        person: person.to_string(),
        taken,
        next_due: next_due.to_string(),
        condition: condition.to_string(),
    }
}

fn reminder(id: u64, kind: ReminderKind, name: &str, time: &str, person: &str) -> Reminder {
    Reminder {
        id: RecordId::new(id),
        kind,
        name: name.to_string(),
        time: time.to_string(),
        person: person.to_string(),
    }
}

fn metric(name: &str, value: u8, tone: BadgeTone) -> HealthMetric {
    HealthMetric {
        name: name.to_string(),
        value,
        tone,
    }
}

fn activity(
    id: u64,
    action: &str,
    person: &str,
    time: &str,
    status: ActivityStatus,
) -> ActivityEntry {
    ActivityEntry {
        id: RecordId::new(id),
        action: action.to_string(),
        person: person.to_string(),
        time: time.to_string(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::{sample_appointments, sample_family_members, sample_medications};
    use crate::model::record::{Record, RecordId};

    fn ids<T: Record>(records: &[T]) -> Vec<RecordId> {
        records.iter().map(Record::id).collect()
    }

    #[test]
    fn sample_ids_are_sequential_from_one() {
        let expected = |n: u64| (1..=n).map(RecordId::new).collect::<Vec<_>>();
        assert_eq!(ids(&sample_family_members()), expected(3));
        assert_eq!(ids(&sample_medications()), expected(4));
        assert_eq!(ids(&sample_appointments()), expected(3));
    }
}
