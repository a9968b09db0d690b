//! Appointment scheduler use-cases.

use crate::model::appointment::{short_date_label, Appointment, AppointmentDraft, AppointmentType};
use crate::model::record::RecordId;
use crate::notify::NotificationSink;
use crate::seed::FAMILY_MEMBER_OPTIONS;
use crate::store::commit::commit;
use crate::store::draft::ValidationError;
use crate::store::entity_store::EntityStore;
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Days counted as "this week", starting today.
pub const WEEK_WINDOW_DAYS: u64 = 7;
/// Label shown when nothing is coming up.
pub const NO_UPCOMING_LABEL: &str = "None scheduled";

/// Quick-stat counters for the appointment screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentSummary {
    pub total: usize,
    pub pending: usize,
    /// Non-cancelled appointments dated within `[today, today + 7 days)`.
    pub this_week: usize,
    /// Earliest non-cancelled appointment date on or after today.
    pub next_date: Option<NaiveDate>,
}

impl AppointmentSummary {
    /// `"Jan 15"` style label for the next appointment card.
    pub fn next_label(&self) -> String {
        self.next_date
            .map(short_date_label)
            .unwrap_or_else(|| NO_UPCOMING_LABEL.to_string())
    }
}

/// View-model for the appointment screen.
pub struct AppointmentService<N: NotificationSink> {
    store: EntityStore<Appointment>,
    draft: AppointmentDraft,
    notifier: N,
}

impl<N: NotificationSink> AppointmentService<N> {
    /// Creates a service with an empty store.
    pub fn new(notifier: N) -> Self {
        Self::with_records(Vec::new(), notifier)
    }

    /// Creates a service seeded with existing records.
    pub fn with_records(records: Vec<Appointment>, notifier: N) -> Self {
        Self {
            store: EntityStore::with_records(records),
            draft: AppointmentDraft::default(),
            notifier,
        }
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    /// Form buffer for field-by-field edits.
    pub fn draft_mut(&mut self) -> &mut AppointmentDraft {
        &mut self.draft
    }

    /// Commits the current draft as a new pending appointment.
    ///
    /// # Contract
    /// - Requires `date` and `person`; every other field has a default.
    /// - The date is stored as typed, without calendar validation.
    pub fn schedule_appointment(&mut self) -> Result<Appointment, ValidationError> {
        commit(&mut self.store, &mut self.draft, &self.notifier)
    }

    /// Appointments in display order.
    pub fn appointments(&self) -> &[Appointment] {
        self.store.records()
    }

    pub fn get(&self, id: RecordId) -> Option<&Appointment> {
        self.store.get(id)
    }

    /// Counters relative to `today`. Unparseable dates never count as upcoming.
    pub fn summary(&self, today: NaiveDate) -> AppointmentSummary {
        let window_end = today
            .checked_add_days(Days::new(WEEK_WINDOW_DAYS))
            .unwrap_or(NaiveDate::MAX);
        let upcoming = self
            .store
            .iter()
            .filter(|appointment| appointment.is_active())
            .filter_map(Appointment::calendar_date)
            .filter(|date| *date >= today)
            .collect::<Vec<_>>();

        AppointmentSummary {
            total: self.store.len(),
            pending: self.store.count(Appointment::is_pending),
            this_week: upcoming.iter().filter(|date| **date < window_end).count(),
            next_date: upcoming.into_iter().min(),
        }
    }

    /// Names offered by the person picker.
    pub fn person_options(&self) -> &'static [&'static str] {
        &FAMILY_MEMBER_OPTIONS
    }

    pub fn type_options(&self) -> &'static [AppointmentType] {
        &AppointmentType::ALL
    }
}
