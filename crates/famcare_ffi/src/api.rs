//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one opaque `CareSession` per UI session with sync, use-case-level
//!   methods for each dashboard screen.
//! - Flatten core records into display cards the UI renders as-is.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Action results use `ActionResponse`; `ok` is true only when state changed.
//! - Every notification produced by core is delivered through
//!   `drain_notifications`, never through return values.

use chrono::{Local, NaiveDate};
use famcare_core::model::appointment::parse_date;
use famcare_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Appointment, CareHome, FamilyMember, Medication, Notification, NotificationQueue, RecordId,
    SessionOptions, Severity, ValidationError,
};
use flutter_rust_bridge::frb;
use log::{debug, info};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether the action changed session state.
    pub ok: bool,
    /// Id of the created or updated record.
    pub record_id: Option<u64>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, record_id: Option<RecordId>) -> Self {
        Self {
            ok: true,
            record_id: record_id.map(RecordId::get),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            record_id: None,
            message: message.into(),
        }
    }

    fn rejected(action: &str, err: &ValidationError) -> Self {
        Self::failure(format!("{action} failed: {err}"))
    }
}

/// Toast payload handed to the UI presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub id: String,
    pub title: String,
    pub description: String,
    /// `true` renders the destructive (error) variant.
    pub destructive: bool,
}

/// Add-member form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FamilyMemberInput {
    pub name: String,
    pub relationship: String,
    pub age: String,
    pub emergency_contact: String,
}

/// Add-medication form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MedicationInput {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub person: String,
    pub condition: String,
}

/// Scheduling form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentInput {
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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCard {
    pub id: u64,
    pub name: String,
    pub initials: String,
    pub relationship: String,
    pub relationship_tone: String,
    pub age: u32,
    pub health_conditions: Vec<String>,
    pub emergency_contact: String,
    pub next_appointment: String,
    pub medication_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationCard {
    pub id: u64,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub time: String,
    pub person: String,
    pub taken: bool,
    pub next_due: String,
    pub condition: String,
    pub status_label: String,
    pub status_tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentCard {
    pub id: u64,
    pub title: String,
    pub doctor: String,
    pub date: String,
    pub formatted_date: String,
    pub time: String,
    pub person: String,
    pub location: String,
    pub phone: String,
    pub kind: String,
    pub kind_tone: String,
    pub notes: String,
    pub status: String,
    pub status_tone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicationStats {
    pub total: u32,
    pub taken: u32,
    pub pending_today: u32,
    pub adherence_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentStats {
    pub total: u32,
    pub pending: u32,
    pub this_week: u32,
    /// `"Jan 15"` style label, or `"None scheduled"`.
    pub next_appointment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderItem {
    pub name: String,
    pub time: String,
    pub person: String,
    pub kind: String,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricItem {
    pub name: String,
    pub value: u8,
    pub tone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub action: String,
    pub person: String,
    pub time: String,
    pub status: String,
    pub tone: String,
}

/// Everything the dashboard tab renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub todays_medications: u32,
    pub upcoming_appointments: u32,
    pub active_reminders: u32,
    pub reminders: Vec<ReminderItem>,
    pub metrics: Vec<MetricItem>,
    pub recent_activity: Vec<ActivityItem>,
}

/// One UI session. Dart owns the handle; dropping it discards all state.
#[frb(opaque)]
pub struct CareSession {
    home: CareHome<NotificationQueue>,
    notifications: NotificationQueue,
}

impl CareSession {
    /// Opens a session.
    ///
    /// `seed_sample_data` overrides the `FAMCARE_SAMPLE_DATA` environment
    /// setting when provided.
    #[frb(sync)]
    pub fn open(seed_sample_data: Option<bool>) -> CareSession {
        let options = SessionOptions::from_env().with_seed_override(seed_sample_data);
        let notifications = NotificationQueue::new();
        let home = CareHome::open(options, notifications.clone());
        info!(
            "event=ffi_session_open module=ffi status=ok seeded={}",
            options.seed_sample_data
        );
        CareSession {
            home,
            notifications,
        }
    }

    /// Router key of the active tab.
    #[frb(sync)]
    pub fn active_screen(&self) -> String {
        self.home.active_screen().as_str().to_string()
    }

    #[frb(sync)]
    pub fn select_screen(&mut self, key: String) -> ActionResponse {
        match self.home.select_screen(key.as_str()) {
            Ok(screen) => {
                ActionResponse::success(format!("Switched to {}.", screen.title()), None)
            }
            Err(err) => ActionResponse::failure(format!("select_screen failed: {err}")),
        }
    }

    /// Commits the add-member form. On rejection the form values stay in
    /// the core draft and an error toast is queued.
    #[frb(sync)]
    pub fn add_family_member(&mut self, input: FamilyMemberInput) -> ActionResponse {
        let draft = self.home.family.draft_mut();
        draft.name = input.name;
        draft.relationship = input.relationship;
        draft.age = input.age;
        draft.emergency_contact = input.emergency_contact;

        match self.home.family.add_member() {
            Ok(member) => ActionResponse::success("Family member added.", Some(member.id)),
            Err(err) => ActionResponse::rejected("add_family_member", &err),
        }
    }

    #[frb(sync)]
    pub fn add_medication(&mut self, input: MedicationInput) -> ActionResponse {
        let draft = self.home.medications.draft_mut();
        draft.name = input.name;
        draft.dosage = input.dosage;
        draft.frequency = input.frequency;
        draft.time = input.time;
        draft.person = input.person;
        draft.condition = input.condition;

        match self.home.medications.add_medication() {
            Ok(medication) => ActionResponse::success("Medication added.", Some(medication.id)),
            Err(err) => ActionResponse::rejected("add_medication", &err),
        }
    }

    /// Flips the taken checkbox. Unknown ids change nothing and queue no toast.
    #[frb(sync)]
    pub fn toggle_medication_taken(&mut self, id: u64) -> ActionResponse {
        match self.home.medications.toggle_taken(RecordId::new(id)) {
            Some(medication) => {
                let message = if medication.taken {
                    "Medication marked taken."
                } else {
                    "Medication unmarked."
                };
                ActionResponse::success(message, Some(medication.id))
            }
            None => {
                ActionResponse::failure(format!("no medication with id {id}; nothing changed"))
            }
        }
    }

    #[frb(sync)]
    pub fn schedule_appointment(&mut self, input: AppointmentInput) -> ActionResponse {
        let draft = self.home.appointments.draft_mut();
        draft.title = input.title;
        draft.doctor = input.doctor;
        draft.date = input.date;
        draft.time = input.time;
        draft.person = input.person;
        draft.location = input.location;
        draft.phone = input.phone;
        draft.kind = input.kind;
        draft.notes = input.notes;

        match self.home.appointments.schedule_appointment() {
            Ok(appointment) => {
                ActionResponse::success("Appointment scheduled.", Some(appointment.id))
            }
            Err(err) => ActionResponse::rejected("schedule_appointment", &err),
        }
    }

    #[frb(sync)]
    pub fn family_members(&self) -> Vec<MemberCard> {
        self.home.family.members().iter().map(to_member_card).collect()
    }

    #[frb(sync)]
    pub fn relationship_options(&self) -> Vec<String> {
        self.home
            .family
            .relationship_options()
            .iter()
            .map(|relationship| relationship.label().to_string())
            .collect()
    }

    #[frb(sync)]
    pub fn medications(&self) -> Vec<MedicationCard> {
        self.home
            .medications
            .medications()
            .iter()
            .map(to_medication_card)
            .collect()
    }

    #[frb(sync)]
    pub fn medication_stats(&self) -> MedicationStats {
        let summary = self.home.medications.summary();
        MedicationStats {
            total: to_u32(summary.total),
            taken: to_u32(summary.taken),
            pending_today: to_u32(summary.pending_today),
            adherence_percent: summary.adherence_percent,
        }
    }

    #[frb(sync)]
    pub fn frequency_options(&self) -> Vec<String> {
        self.home
            .medications
            .frequency_options()
            .iter()
            .map(|frequency| frequency.to_string())
            .collect()
    }

    /// Names offered by the medication and appointment person pickers.
    #[frb(sync)]
    pub fn person_options(&self) -> Vec<String> {
        self.home
            .medications
            .person_options()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    #[frb(sync)]
    pub fn appointments(&self) -> Vec<AppointmentCard> {
        self.home
            .appointments
            .appointments()
            .iter()
            .map(to_appointment_card)
            .collect()
    }

    #[frb(sync)]
    pub fn appointment_type_options(&self) -> Vec<String> {
        self.home
            .appointments
            .type_options()
            .iter()
            .map(|kind| kind.label().to_string())
            .collect()
    }

    /// Appointment counters relative to `today` (`YYYY-MM-DD`), or the local
    /// date when absent or unparseable.
    #[frb(sync)]
    pub fn appointment_stats(&self, today: Option<String>) -> AppointmentStats {
        let summary = self.home.appointments.summary(resolve_today(today.as_deref()));
        AppointmentStats {
            total: to_u32(summary.total),
            pending: to_u32(summary.pending),
            this_week: to_u32(summary.this_week),
            next_appointment: summary.next_label(),
        }
    }

    #[frb(sync)]
    pub fn dashboard(&self) -> DashboardView {
        let dashboard = &self.home.dashboard;
        let overview = dashboard.overview();
        DashboardView {
            todays_medications: overview.todays_medications,
            upcoming_appointments: overview.upcoming_appointments,
            active_reminders: overview.active_reminders,
            reminders: dashboard
                .reminders()
                .iter()
                .map(|reminder| ReminderItem {
                    name: reminder.name.clone(),
                    time: reminder.time.clone(),
                    person: reminder.person.clone(),
                    kind: reminder.kind.as_str().to_string(),
                    tone: reminder.kind.tone().as_str().to_string(),
                })
                .collect(),
            metrics: dashboard
                .metrics()
                .iter()
                .map(|metric| MetricItem {
                    name: metric.name.clone(),
                    value: metric.value,
                    tone: metric.tone.as_str().to_string(),
                })
                .collect(),
            recent_activity: dashboard
                .recent_activity()
                .iter()
                .map(|entry| ActivityItem {
                    action: entry.action.clone(),
                    person: entry.person.clone(),
                    time: entry.time.clone(),
                    status: entry.status.as_str().to_string(),
                    tone: entry.status.tone().as_str().to_string(),
                })
                .collect(),
        }
    }

    /// Removes and returns queued toasts, oldest first.
    #[frb(sync)]
    pub fn drain_notifications(&self) -> Vec<ToastMessage> {
        self.notifications
            .drain()
            .into_iter()
            .map(to_toast_message)
            .collect()
    }
}

fn to_member_card(member: &FamilyMember) -> MemberCard {
    MemberCard {
        id: member.id.get(),
        name: member.name.clone(),
        initials: member.initials(),
        relationship: member.relationship.clone(),
        relationship_tone: member.relationship_kind().tone().as_str().to_string(),
        age: member.age,
        health_conditions: member.health_conditions.iter().cloned().collect(),
        emergency_contact: member.emergency_contact.clone(),
        next_appointment: member.next_appointment.clone(),
        medication_count: member.medication_count,
    }
}

fn to_medication_card(medication: &Medication) -> MedicationCard {
    let status = medication.status();
    MedicationCard {
        id: medication.id.get(),
        name: medication.name.clone(),
        dosage: medication.dosage.clone(),
        frequency: medication.frequency.clone(),
        time: medication.time.clone(),
        person: medication.person.clone(),
        taken: medication.taken,
        next_due: medication.next_due.clone(),
        condition: medication.condition.clone(),
        status_label: status.label().to_string(),
        status_tone: status.tone().as_str().to_string(),
    }
}

fn to_appointment_card(appointment: &Appointment) -> AppointmentCard {
    AppointmentCard {
        id: appointment.id.get(),
        title: appointment.title.clone(),
        doctor: appointment.doctor.clone(),
        date: appointment.date.clone(),
        formatted_date: appointment.formatted_date(),
        time: appointment.time.clone(),
        person: appointment.person.clone(),
        location: appointment.location.clone(),
        phone: appointment.phone.clone(),
        kind: appointment.kind.clone(),
        kind_tone: appointment.kind().tone().as_str().to_string(),
        notes: appointment.notes.clone(),
        status: appointment.status.as_str().to_string(),
        status_tone: appointment.status.tone().as_str().to_string(),
    }
}

fn to_toast_message(notification: Notification) -> ToastMessage {
    ToastMessage {
        id: notification.id.to_string(),
        title: notification.title,
        description: notification.description,
        destructive: notification.severity == Severity::Destructive,
    }
}

fn resolve_today(raw: Option<&str>) -> NaiveDate {
    if let Some(parsed) = raw.and_then(parse_date) {
        return parsed;
    }
    let today = Local::now().date_naive();
    if let Some(raw) = raw {
        debug!(
            "event=resolve_today module=ffi status=fallback input={:?} today={}",
            raw, today
        );
    }
    today
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, ping, resolve_today, AppointmentInput, CareSession,
        FamilyMemberInput, MedicationInput,
    };
    use chrono::{Local, NaiveDate};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/famcare-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn add_medication_reports_validation_failure_and_queues_error_toast() {
        let mut session = CareSession::open(Some(true));
        let response = session.add_medication(MedicationInput {
            dosage: "10mg".to_string(),
            person: "Sarah Johnson".to_string(),
            ..MedicationInput::default()
        });
        assert!(!response.ok);
        assert!(response.message.contains("name"), "{}", response.message);
        assert_eq!(session.medications().len(), 4);

        let toasts = session.drain_notifications();
        assert_eq!(toasts.len(), 1);
        assert!(toasts[0].destructive);
        assert_eq!(toasts[0].description, "Please fill in all required fields.");
        assert!(session.drain_notifications().is_empty());
    }

    #[test]
    fn schedule_appointment_returns_new_id_and_card_defaults() {
        let mut session = CareSession::open(Some(true));
        let response = session.schedule_appointment(AppointmentInput {
            person: "Emma Johnson".to_string(),
            date: "2024-02-01".to_string(),
            ..AppointmentInput::default()
        });
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.record_id, Some(4));

        let cards = session.appointments();
        let card = cards.last().expect("new appointment card");
        assert_eq!(card.time, "9:00 AM");
        assert_eq!(card.location, "TBD");
        assert_eq!(card.status, "pending");
        assert_eq!(card.status_tone, "yellow");
        assert_eq!(card.formatted_date, "Thursday, February 1, 2024");
    }

    #[test]
    fn toggle_unknown_medication_changes_nothing() {
        let mut session = CareSession::open(Some(true));
        let response = session.toggle_medication_taken(99);
        assert!(!response.ok);
        assert_eq!(response.record_id, None);
        assert!(session.drain_notifications().is_empty());
    }

    #[test]
    fn toggle_known_medication_updates_card_and_stats() {
        let mut session = CareSession::open(Some(true));
        let before = session.medication_stats();
        let response = session.toggle_medication_taken(2);
        assert!(response.ok);
        assert_eq!(response.record_id, Some(2));

        let cards = session.medications();
        let card = &cards[1];
        assert!(card.taken);
        assert_eq!(card.status_label, "Taken");
        assert_eq!(session.medication_stats().taken, before.taken + 1);
        assert_eq!(session.drain_notifications()[0].title, "Medication taken");
    }

    #[test]
    fn unseeded_session_accepts_new_members() {
        let mut session = CareSession::open(Some(false));
        assert!(session.family_members().is_empty());

        let response = session.add_family_member(FamilyMemberInput {
            name: "Grace Johnson".to_string(),
            relationship: "Parent".to_string(),
            age: "67".to_string(),
            emergency_contact: String::new(),
        });
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.record_id, Some(1));

        let members = session.family_members();
        assert_eq!(members[0].initials, "GJ");
        assert_eq!(members[0].relationship_tone, "green");
    }

    #[test]
    fn appointment_stats_use_supplied_today() {
        let session = CareSession::open(Some(true));
        let stats = session.appointment_stats(Some("2024-01-14".to_string()));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.this_week, 1);
        assert_eq!(stats.next_appointment, "Jan 15");
    }

    #[test]
    fn unparseable_today_falls_back_to_local_date() {
        let before = Local::now().date_naive();
        let resolved = resolve_today(Some("not-a-date"));
        let after = Local::now().date_naive();
        assert!(resolved == before || resolved == after);
        assert_eq!(
            resolve_today(Some("2024-01-14")),
            NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()
        );

        let session = CareSession::open(Some(true));
        let stats = session.appointment_stats(Some("not-a-date".to_string()));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 1);
    }

    #[test]
    fn picker_options_come_from_the_services() {
        let session = CareSession::open(Some(true));
        assert_eq!(
            session.frequency_options(),
            vec!["Once daily", "Twice daily", "Three times daily", "As needed"]
        );
        assert_eq!(
            session.appointment_type_options(),
            vec![
                "General",
                "Cardiology",
                "Pediatric",
                "Dermatology",
                "Orthopedic",
                "Ophthalmology"
            ]
        );
        assert_eq!(
            session.relationship_options(),
            vec!["Self", "Spouse", "Parent", "Child", "Daughter", "Son", "Other"]
        );
    }

    #[test]
    fn select_screen_reports_unknown_keys() {
        let mut session = CareSession::open(Some(true));
        assert_eq!(session.active_screen(), "dashboard");
        assert!(session.select_screen("appointments".to_string()).ok);
        assert_eq!(session.active_screen(), "appointments");
        assert!(!session.select_screen("pricing".to_string()).ok);
        assert_eq!(session.active_screen(), "appointments");
    }

    #[test]
    fn dashboard_view_exposes_samples_with_tones() {
        let session = CareSession::open(Some(true));
        let view = session.dashboard();
        assert_eq!(view.todays_medications, 12);
        assert_eq!(view.reminders[0].tone, "blue");
        assert_eq!(view.reminders[1].kind, "appointment");
        assert_eq!(view.metrics[1].value, 92);
        assert_eq!(view.recent_activity[2].status, "pending");
    }
}
